//! Runs every fetch pipeline, then every analysis pipeline
//!
//! No failure short-circuits the run: each pipeline logs its own failure and
//! the next one starts. Fetches are independent (distinct files, no shared
//! state) and may run on a rayon pool; all of them finish before the first
//! analysis reads their outputs.

use std::fmt;

use rayon::prelude::*;

use crate::config::{Config, Dirs, FetchJob};
use crate::error::{DatafunError, Result};
use crate::fetcher::{Fetcher, HttpTransport, Transport};
use crate::pipeline::{self, Stage, StageOutcome};
use crate::progress::ProgressDisplay;

/// Outcomes of a run, in the order the stages were configured
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<StageOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> impl Iterator<Item = &StageOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &StageOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(StageOutcome::is_success)
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Turn a run with failures into an error
    pub fn into_result(self) -> Result<Self> {
        let failed = self.failed().count();
        if failed == 0 {
            Ok(self)
        } else {
            Err(DatafunError::StagesFailed {
                failed,
                total: self.total(),
            })
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |stage: Stage, ok: bool| {
            self.outcomes
                .iter()
                .filter(|o| o.stage == stage && o.is_success() == ok)
                .count()
        };
        write!(
            f,
            "Fetch: {} ok, {} failed; Analysis: {} ok, {} failed",
            count(Stage::Fetch, true),
            count(Stage::Fetch, false),
            count(Stage::Analysis, true),
            count(Stage::Analysis, false)
        )
    }
}

/// Drives the configured pipelines
pub struct Orchestrator<'a, T: Transport = HttpTransport> {
    config: &'a Config,
    fetcher: Fetcher<T>,
    show_progress: bool,
}

impl<'a> Orchestrator<'a, HttpTransport> {
    /// Orchestrator fetching over HTTP with the configured timeout
    pub fn from_config(config: &'a Config) -> Result<Self> {
        let transport = HttpTransport::new(config.http.timeout())?;
        Ok(Self::new(config, Fetcher::new(transport)))
    }
}

impl<'a, T: Transport> Orchestrator<'a, T> {
    pub fn new(config: &'a Config, fetcher: Fetcher<T>) -> Self {
        Self {
            config,
            fetcher,
            show_progress: false,
        }
    }

    /// Draw a progress bar while running
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run every fetch pipeline, then every analysis pipeline
    pub fn run_all(&self) -> RunSummary {
        let progress = self.progress(self.config.fetch.len() + self.config.analyze.len());

        tracing::info!("=== Running all data fetching jobs ===");
        let mut outcomes = self.fetch_all(&progress);

        tracing::info!("=== Running all data processing jobs ===");
        outcomes.extend(self.analyze_all(&progress));

        progress.finish();
        let summary = RunSummary { outcomes };
        tracing::info!("Run complete: {summary}");
        summary
    }

    /// Run only the fetch pipelines
    pub fn run_fetches(&self) -> RunSummary {
        let progress = self.progress(self.config.fetch.len());
        let outcomes = self.fetch_all(&progress);
        progress.finish();
        RunSummary { outcomes }
    }

    /// Run only the analysis pipelines
    pub fn run_analyses(&self) -> RunSummary {
        let progress = self.progress(self.config.analyze.len());
        let outcomes = self.analyze_all(&progress);
        progress.finish();
        RunSummary { outcomes }
    }

    fn progress(&self, total: usize) -> ProgressDisplay {
        ProgressDisplay::new(total as u64, self.show_progress)
    }

    fn fetch_all(&self, progress: &ProgressDisplay) -> Vec<StageOutcome> {
        let dirs = self.config.dirs();
        let jobs = &self.config.fetch;
        let run_one = |job: &FetchJob| {
            progress.start_stage("fetch", &job.name);
            let outcome = pipeline::run_fetch(&self.fetcher, &dirs, job);
            progress.inc_stage();
            outcome
        };

        if self.config.concurrency > 1 && jobs.len() > 1 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.concurrency)
                .build()
            {
                // collect() on an indexed parallel iterator keeps job order
                Ok(pool) => return pool.install(|| jobs.par_iter().map(run_one).collect()),
                Err(e) => {
                    tracing::warn!("Could not start fetch worker pool, fetching sequentially: {e}");
                }
            }
        }

        jobs.iter().map(run_one).collect()
    }

    fn analyze_all(&self, progress: &ProgressDisplay) -> Vec<StageOutcome> {
        let dirs: Dirs = self.config.dirs();
        self.config
            .analyze
            .iter()
            .map(|job| {
                progress.start_stage("analysis", &job.name);
                let outcome = pipeline::run_analysis(&dirs, job);
                progress.inc_stage();
                outcome
            })
            .collect()
    }
}
