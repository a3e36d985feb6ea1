//! CLI definitions using clap derive API
//!
//! Global options apply to every subcommand. Running without a subcommand
//! is the same as `datafun run`.
//! - completions: Completions command arguments
//! - init: Init command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod init;

pub use completions::CompletionsArgs;
pub use init::InitArgs;

/// Datafun - fetch public data sets and summarize them
#[derive(Parser, Debug)]
#[command(
    name = "datafun",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Fetch text, CSV and JSON data sets and write summary reports",
    long_about = "Datafun downloads a configured set of remote resources (text, CSV, JSON), \
                  saves them locally, then runs word counts, column statistics and group \
                  counts over the saved files and writes one plain-text report per analysis.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  datafun                               \x1b[90m# Fetch everything, then analyze\x1b[0m\n   \
                  datafun fetch -j 4                    \x1b[90m# Fetch only, four at a time\x1b[0m\n   \
                  datafun process                       \x1b[90m# Analyze previously fetched files\x1b[0m\n   \
                  datafun list                          \x1b[90m# Show configured jobs\x1b[0m\n   \
                  datafun init                          \x1b[90m# Write a sample datafun.yaml\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./datafun.yaml when present)
    #[arg(long, short = 'c', global = true, env = "DATAFUN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the directory fetched files are written to
    #[arg(long, global = true, value_name = "DIR")]
    pub fetched_dir: Option<PathBuf>,

    /// Override the directory reports are written to
    #[arg(long, global = true, value_name = "DIR")]
    pub processed_dir: Option<PathBuf>,

    /// Number of fetches to run at once
    #[arg(long, short = 'j', global = true, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Exit with an error when any stage failed
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every resource, then run every analysis
    Run,

    /// Fetch every resource
    Fetch,

    /// Run every analysis on previously fetched files
    Process,

    /// List configured jobs
    List,

    /// Write a sample configuration file
    Init(InitArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Settings that override values from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub fetched_dir: Option<PathBuf>,
    pub processed_dir: Option<PathBuf>,
    pub concurrency: Option<usize>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            fetched_dir: self.fetched_dir.clone(),
            processed_dir: self.processed_dir.clone(),
            concurrency: self.concurrency,
        }
    }
}
