//! Datafun - fetch public data sets and summarize them
//!
//! Downloads a configured set of text, CSV and JSON resources into a local
//! directory, then runs word counts, column statistics and group counts over
//! the saved files and writes one plain-text report per analysis.

use clap::Parser;

mod analysis;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod fetcher;
mod logging;
mod orchestrator;
mod pipeline;
mod progress;
mod report;
mod ui;
mod writer;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // The bar shares stderr with log output, so only draw it when logs go
    // to a file
    let ctx = CommandContext {
        config: cli.config.clone(),
        overrides: cli.overrides(),
        strict: cli.strict,
        show_progress: cli.log_file.is_some() && console::Term::stderr().is_term(),
    };

    let result = match cli.command {
        None | Some(Commands::Run) => commands::run::run(&ctx),
        Some(Commands::Fetch) => commands::fetch::run(&ctx),
        Some(Commands::Process) => commands::process::run(&ctx),
        Some(Commands::List) => commands::list::run(&ctx),
        Some(Commands::Init(args)) => commands::init::run(args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
