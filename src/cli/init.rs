use clap::Parser;
use std::path::PathBuf;

/// Arguments for init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Replace an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}
