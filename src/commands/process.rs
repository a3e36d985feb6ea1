//! Process command implementation

use crate::commands::CommandContext;
use crate::commands::run::{Stages, run_stages};
use crate::error::Result;

/// Run every configured analysis on previously fetched files
pub fn run(ctx: &CommandContext) -> Result<()> {
    run_stages(ctx, Stages::AnalysesOnly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatafunError;
    use tempfile::TempDir;

    #[test]
    fn test_process_from_config_file() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("data");
        let processed = temp.path().join("processed");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("scores.csv"), "name,score\na,1\nb,3\n").unwrap();

        let config_path = temp.path().join("datafun.yaml");
        std::fs::write(
            &config_path,
            format!(
                "fetched_dir: '{}'\nprocessed_dir: '{}'\nanalyze:\n  - name: stats\n    input: scores.csv\n    output: stats.txt\n    analysis:\n      type: column_stats\n      column: score\n",
                data.display(),
                processed.display()
            ),
        )
        .unwrap();

        let ctx = CommandContext {
            config: Some(config_path),
            strict: true,
            ..CommandContext::default()
        };
        run(&ctx).unwrap();

        assert!(
            std::fs::read_to_string(processed.join("stats.txt"))
                .unwrap()
                .starts_with("score Statistics:\nMinimum: 1.00\nMaximum: 3.00\nMean: 2.00\n")
        );
    }

    #[test]
    fn test_process_invalid_config_fails_before_running() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("datafun.yaml");
        std::fs::write(&config_path, "concurrency: 0\n").unwrap();

        let ctx = CommandContext {
            config: Some(config_path),
            ..CommandContext::default()
        };

        assert!(matches!(run(&ctx), Err(DatafunError::ConfigInvalid { .. })));
    }
}
