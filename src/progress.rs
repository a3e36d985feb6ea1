//! Progress bar display for pipeline runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the stages of a run
pub struct ProgressDisplay {
    stage_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress display with total stage count; hidden when
    /// `visible` is false
    pub fn new(total_stages: u64, visible: bool) -> Self {
        let stage_pb = if visible {
            let style = ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
            let pb = ProgressBar::new(total_stages);
            pb.set_style(style);
            pb
        } else {
            ProgressBar::hidden()
        };

        Self { stage_pb }
    }

    /// Show the stage currently running
    pub fn start_stage(&self, stage: &str, name: &str) {
        let msg = if name.chars().count() > 40 {
            let short: String = name.chars().take(37).collect();
            format!("{stage} {short}...")
        } else {
            format!("{stage} {name}")
        };
        self.stage_pb.set_message(msg);
    }

    /// Increment stage progress
    pub fn inc_stage(&self) {
        self.stage_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.stage_pb.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.stage_pb.position()
    }
}
