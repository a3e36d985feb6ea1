//! File system errors

use super::DatafunError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DatafunError {
    DatafunError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> DatafunError {
    DatafunError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> DatafunError {
    DatafunError::DirCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
