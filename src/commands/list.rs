//! List command implementation

use crate::commands::CommandContext;
use crate::error::Result;
use crate::ui;

/// Print the configured directories and jobs
pub fn run(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config()?;
    print!("{}", ui::render_jobs(&config));
    Ok(())
}
