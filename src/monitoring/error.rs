//! Monitoring error types.
//!
//! Shape grounded on the teacher's `monitoring::error::MonitoringError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitoringError {
    #[error("failed to record event: {message}")]
    RecordError { message: String },

    #[error("failed to generate snapshot: {message}")]
    SnapshotError { message: String },

    #[error("failed to reset monitor: {message}")]
    ResetError { message: String },
}

impl MonitoringError {
    pub fn record(message: impl Into<String>) -> Self {
        Self::RecordError {
            message: message.into(),
        }
    }

    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::SnapshotError {
            message: message.into(),
        }
    }

    pub fn reset(message: impl Into<String>) -> Self {
        Self::ResetError {
            message: message.into(),
        }
    }
}
