//! Command helper utilities

use std::path::PathBuf;

use crate::cli::Overrides;
use crate::config::Config;
use crate::error::Result;

/// Global options shared by the configuration-driven commands
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub strict: bool,
    pub show_progress: bool,
}

impl CommandContext {
    /// Load the configuration, apply command-line overrides and validate
    /// the result
    pub fn load_config(&self) -> Result<Config> {
        let base = std::env::current_dir()?;
        let mut config = Config::load(self.config.as_deref(), &base)?;
        apply_overrides(&mut config, &self.overrides);
        config.validate()?;
        Ok(config)
    }
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(dir) = &overrides.fetched_dir {
        config.fetched_dir = dir.clone();
    }
    if let Some(dir) = &overrides.processed_dir {
        config.processed_dir = dir.clone();
    }
    if let Some(concurrency) = overrides.concurrency {
        config.concurrency = concurrency;
    }
}
