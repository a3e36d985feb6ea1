//! Run command implementation
//!
//! Shared by `run`, `fetch` and `process`: each selects which pipelines the
//! orchestrator drives, then prints the summary.

use crate::commands::CommandContext;
use crate::config::Config;
use crate::error::Result;
use crate::orchestrator::{Orchestrator, RunSummary};
use crate::ui;

/// Which pipelines a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stages {
    All,
    FetchOnly,
    AnalysesOnly,
}

/// Run fetches, then analyses
pub fn run(ctx: &CommandContext) -> Result<()> {
    run_stages(ctx, Stages::All)
}

pub(crate) fn run_stages(ctx: &CommandContext, stages: Stages) -> Result<()> {
    let config = ctx.load_config()?;
    execute(&config, stages, ctx).map(|_| ())
}

fn execute(config: &Config, stages: Stages, ctx: &CommandContext) -> Result<RunSummary> {
    let orchestrator = Orchestrator::from_config(config)?.with_progress(ctx.show_progress);
    let summary = match stages {
        Stages::All => orchestrator.run_all(),
        Stages::FetchOnly => orchestrator.run_fetches(),
        Stages::AnalysesOnly => orchestrator.run_analyses(),
    };

    print!("{}", ui::render_summary(&summary));

    if ctx.strict {
        summary.into_result()
    } else {
        Ok(summary)
    }
}
