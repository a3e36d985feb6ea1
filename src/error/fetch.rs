//! Fetch errors: validation, transport and remote status failures

use super::DatafunError;

/// Creates a validation failed error
pub fn validation_failed(message: impl Into<String>) -> DatafunError {
    DatafunError::ValidationFailed {
        message: message.into(),
    }
}

/// Creates a network (transport) error
pub fn network_failed(url: impl Into<String>, reason: impl Into<String>) -> DatafunError {
    DatafunError::NetworkFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a non-2xx status error
pub fn remote_status(url: impl Into<String>, status: u16) -> DatafunError {
    DatafunError::RemoteStatus {
        url: url.into(),
        status,
    }
}
