//! Configuration file handling for datafun
//!
//! The configuration (`datafun.yaml` by default) holds the two target
//! directories, HTTP settings and the lists of fetch and analysis jobs.
//! Without a configuration file the built-in defaults are used; they
//! fetch and summarize three small demonstration data sets.

pub mod jobs;

pub use jobs::{AnalysisJob, FetchJob};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Configuration file looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "datafun.yaml";

fn default_fetched_dir() -> PathBuf {
    PathBuf::from("example_data")
}

fn default_processed_dir() -> PathBuf {
    PathBuf::from("example_processed")
}

fn default_concurrency() -> usize {
    1
}

fn default_timeout_secs() -> u64 {
    30
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory fetched files are written to and analyses read from
    #[serde(default = "default_fetched_dir")]
    pub fetched_dir: PathBuf,

    /// Directory reports are written to
    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,

    #[serde(default)]
    pub http: HttpConfig,

    /// Number of fetch jobs run at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default)]
    pub fetch: Vec<FetchJob>,

    #[serde(default)]
    pub analyze: Vec<AnalysisJob>,
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The two directories every pipeline call works against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub fetched: PathBuf,
    pub processed: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetched_dir: default_fetched_dir(),
            processed_dir: default_processed_dir(),
            http: HttpConfig::default(),
            concurrency: default_concurrency(),
            fetch: jobs::default_fetch_jobs(),
            analyze: jobs::default_analysis_jobs(),
        }
    }
}

impl Config {
    /// Parse configuration from YAML; `origin` names the source in errors
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(origin, e.to_string()))
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                config::not_found(&shown)
            } else {
                config::read_failed(&shown, e.to_string())
            }
        })?;
        Self::from_yaml(&content, &shown)
    }

    /// Load `path` if given; otherwise `datafun.yaml` in `base` when it
    /// exists, else the built-in defaults
    pub fn load(path: Option<&Path>, base: &Path) -> Result<Self> {
        if let Some(path) = path {
            tracing::debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        let default_path = base.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!("Loading configuration from {}", default_path.display());
            Self::from_file(&default_path)
        } else {
            tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using built-in jobs");
            Ok(Self::default())
        }
    }

    pub fn dirs(&self) -> Dirs {
        Dirs {
            fetched: self.fetched_dir.clone(),
            processed: self.processed_dir.clone(),
        }
    }

    /// Check the configuration before anything runs.
    ///
    /// Empty URLs are deliberately accepted here: the fetcher reports them
    /// as a failed stage so the rest of the run still proceeds.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(config::invalid("concurrency must be at least 1"));
        }
        if self.http.timeout_secs == 0 {
            return Err(config::invalid("http.timeout_secs must be at least 1"));
        }

        check_unique("fetch", "name", self.fetch.iter().map(|j| j.name.as_str()))?;
        check_unique("analysis", "name", self.analyze.iter().map(|j| j.name.as_str()))?;

        for job in &self.fetch {
            if job.file.trim().is_empty() {
                return Err(config::invalid(format!(
                    "fetch job '{}' has an empty file name",
                    job.name
                )));
            }
        }

        for job in &self.analyze {
            if job.input.trim().is_empty() || job.output.trim().is_empty() {
                return Err(config::invalid(format!(
                    "analysis job '{}' needs both input and output",
                    job.name
                )));
            }
            job.analysis.validate().map_err(|e| {
                config::invalid(format!("analysis job '{}': {e}", job.name))
            })?;
        }

        // Fetches may run in parallel and every report is its own file
        check_unique("fetch", "file", self.fetch.iter().map(|j| j.file.trim()))?;
        check_unique("analysis", "output", self.analyze.iter().map(|j| j.output.trim()))?;

        Ok(())
    }

    /// Defaults rendered as a commented YAML document
    pub fn sample_yaml() -> Result<String> {
        let yaml = serde_yaml::to_string(&Self::default())?;
        Ok(format!(
            "# datafun configuration\n\
             # Fetch jobs run first, then analysis jobs read their inputs from fetched_dir.\n\
             {yaml}"
        ))
    }
}

fn check_unique<'a>(
    what: &str,
    field: &str,
    values: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if value.trim().is_empty() {
            return Err(config::invalid(format!("{what} job with an empty {field}")));
        }
        if !seen.insert(value) {
            return Err(config::invalid(format!(
                "duplicate {what} job {field} '{value}'"
            )));
        }
    }
    Ok(())
}
