//! Supervisor error types.
//!
//! Shape grounded on the teacher's `supervisor` error conventions (a
//! `thiserror` enum, one variant per failure class).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("restart rate exceeded: more than {max_restarts} restarts within {max_seconds}s")]
    MaxRestartsExceeded { max_restarts: u32, max_seconds: f64 },

    #[error("failed to start child {id}: {reason}")]
    ChildStartFailed { id: String, reason: String },

    #[error("unknown child id: {0}")]
    UnknownChild(String),
}
