//! Error types and handling for datafun
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fetch`]: Validation, network and remote errors raised while fetching
//! - [`fs`]: File system errors
//! - [`analysis`]: Parse and aggregation errors
//! - [`config`]: Configuration errors
//!
//! Every variant maps onto one [`ErrorKind`], which is what stage outcomes
//! and the run summary report.

pub mod analysis;
pub mod config;
pub mod fetch;
pub mod fs;

pub use fetch::validation_failed;

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for datafun operations
#[derive(Error, Diagnostic, Debug)]
pub enum DatafunError {
    // Validation errors
    #[error("Resource location is empty")]
    #[diagnostic(
        code(datafun::validation::empty_location),
        help("Provide a non-empty URL for every fetch job")
    )]
    EmptyLocation,

    #[error("Validation failed: {message}")]
    #[diagnostic(code(datafun::validation::failed))]
    ValidationFailed { message: String },

    // Fetch errors
    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(
        code(datafun::fetch::network),
        help("Check the URL and your network connection")
    )]
    NetworkFailed { url: String, reason: String },

    #[error("HTTP error {status} from {url}")]
    #[diagnostic(code(datafun::fetch::remote_status))]
    RemoteStatus { url: String, status: u16 },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(datafun::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(datafun::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(datafun::fs::create_dir_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(datafun::fs::io_error))]
    IoError { message: String },

    // Parse errors
    #[error("Failed to parse {source_name}: {reason}")]
    #[diagnostic(code(datafun::parse::failed))]
    ParseFailed { source_name: String, reason: String },

    // Analysis errors
    #[error("Column '{column}' not found in {path}")]
    #[diagnostic(
        code(datafun::analysis::column_not_found),
        help("Column names are matched exactly against the header row")
    )]
    ColumnNotFound { column: String, path: String },

    #[error("No valid values for '{column}' in {path}")]
    #[diagnostic(code(datafun::analysis::no_valid_data))]
    NoValidData { column: String, path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(datafun::config::not_found),
        help("Run 'datafun init' to write a sample configuration")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(datafun::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(datafun::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(datafun::config::invalid))]
    ConfigInvalid { message: String },

    // Run errors
    #[error("{failed} of {total} stages failed")]
    #[diagnostic(
        code(datafun::run::stages_failed),
        help("See the log output above for the cause of each failure")
    )]
    StagesFailed { failed: usize, total: usize },
}

/// Coarse error classes reported in stage outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Remote,
    Io,
    Parse,
    Analysis,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Network => "network",
            ErrorKind::Remote => "remote",
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
            ErrorKind::Analysis => "analysis",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

impl DatafunError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatafunError::EmptyLocation | DatafunError::ValidationFailed { .. } => {
                ErrorKind::Validation
            }
            DatafunError::NetworkFailed { .. } => ErrorKind::Network,
            DatafunError::RemoteStatus { .. } => ErrorKind::Remote,
            DatafunError::FileReadFailed { .. }
            | DatafunError::FileWriteFailed { .. }
            | DatafunError::DirCreateFailed { .. }
            | DatafunError::IoError { .. } => ErrorKind::Io,
            DatafunError::ParseFailed { .. } => ErrorKind::Parse,
            DatafunError::ColumnNotFound { .. }
            | DatafunError::NoValidData { .. }
            | DatafunError::StagesFailed { .. } => ErrorKind::Analysis,
            DatafunError::ConfigNotFound { .. }
            | DatafunError::ConfigReadFailed { .. }
            | DatafunError::ConfigParseFailed { .. }
            | DatafunError::ConfigInvalid { .. } => ErrorKind::Config,
        }
    }
}

impl From<std::io::Error> for DatafunError {
    fn from(err: std::io::Error) -> Self {
        DatafunError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DatafunError {
    fn from(err: serde_yaml::Error) -> Self {
        DatafunError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DatafunError>;
