//! The two parameterized pipelines
//!
//! - fetch pipeline: fetch one resource, then write it under the fetched-data
//!   directory
//! - analysis pipeline: analyze one persisted file, then write its report
//!   under the processed-output directory
//!
//! Both recover locally: every error is turned into a failed
//! [`StageOutcome`] carrying its reason, and nothing is propagated.

use std::fmt;
use std::path::PathBuf;

use crate::analysis;
use crate::config::{AnalysisJob, Dirs, FetchJob};
use crate::error::{DatafunError, ErrorKind};
use crate::fetcher::{Fetcher, Transport};
use crate::report;
use crate::writer;

/// Which pipeline produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Analysis,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => f.write_str("fetch"),
            Stage::Analysis => f.write_str("analysis"),
        }
    }
}

/// Why a stage failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReason {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&DatafunError> for FailureReason {
    fn from(err: &DatafunError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result of running one pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub stage: Stage,
    pub name: String,
    /// Path of the file written on success
    pub result: Result<PathBuf, FailureReason>,
}

impl StageOutcome {
    fn new(stage: Stage, name: &str, result: crate::error::Result<PathBuf>) -> Self {
        Self {
            stage,
            name: name.to_string(),
            result: result.map_err(|e| FailureReason::from(&e)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Fetch `job`'s resource and persist it; the writer runs only on success
pub fn run_fetch<T: Transport>(fetcher: &Fetcher<T>, dirs: &Dirs, job: &FetchJob) -> StageOutcome {
    let result = fetcher
        .fetch(&job.resource())
        .and_then(|content| writer::write_content(&dirs.fetched, &job.file, &content));

    if result.is_ok() {
        tracing::info!("SUCCESS: {} fetched and saved as {}", job.name, job.file);
    }
    StageOutcome::new(Stage::Fetch, &job.name, result)
}

/// Analyze `job`'s input and write its report; no report on failure
pub fn run_analysis(dirs: &Dirs, job: &AnalysisJob) -> StageOutcome {
    let input = dirs.fetched.join(&job.input);
    let output = dirs.processed.join(&job.output);

    let result = analysis::analyze(&input, &job.analysis)
        .inspect_err(|e| tracing::error!("Analysis '{}' failed: {e}", job.name))
        .and_then(|aggregate| {
            report::write_report(&output, &aggregate, job.title.as_deref())
                .inspect_err(|e| tracing::error!("Could not write report: {e}"))
        })
        .map(|()| output.clone());

    if result.is_ok() {
        tracing::info!(
            "Processed file: {}, results saved to: {}",
            input.display(),
            output.display()
        );
    }
    StageOutcome::new(Stage::Analysis, &job.name, result)
}
