//! Parse and aggregation errors

use super::DatafunError;

/// Creates a parse failed error
pub fn parse_failed(source_name: impl Into<String>, reason: impl Into<String>) -> DatafunError {
    DatafunError::ParseFailed {
        source_name: source_name.into(),
        reason: reason.into(),
    }
}

/// Creates a column not found error
pub fn column_not_found(column: impl Into<String>, path: impl Into<String>) -> DatafunError {
    DatafunError::ColumnNotFound {
        column: column.into(),
        path: path.into(),
    }
}

/// Creates a no valid data error
pub fn no_valid_data(column: impl Into<String>, path: impl Into<String>) -> DatafunError {
    DatafunError::NoValidData {
        column: column.into(),
        path: path.into(),
    }
}
