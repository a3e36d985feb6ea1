//! Fetch command implementation

use crate::commands::CommandContext;
use crate::commands::run::{Stages, run_stages};
use crate::error::Result;

/// Fetch every configured resource without analyzing it
pub fn run(ctx: &CommandContext) -> Result<()> {
    run_stages(ctx, Stages::FetchOnly)
}
