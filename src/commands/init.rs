//! Init command implementation

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{Result, config};
use crate::writer;

/// Write the built-in jobs as a sample configuration file
pub fn run(args: InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(config::invalid(format!(
            "{} already exists (use --force to replace it)",
            args.path.display()
        )));
    }

    writer::write_text(&args.path, &Config::sample_yaml()?)?;
    println!("Wrote {}", args.path.display());
    Ok(())
}
