//! Errors raised from inside a [`super::GenServer`] handler.

use thiserror::Error;

/// Failure modes surfaced by the generic-server dispatch loop.
#[derive(Debug, Error)]
pub enum GenServerError {
    /// No `handle_call` branch matched the incoming request. Resolves Open
    /// Question (c): the default `handle_call` raises rather than silently
    /// dropping the caller.
    #[error("unhandled call: no handle_call branch matched the request")]
    UnhandledCall,

    /// A user handler's own error, carried through unchanged.
    #[error("{0}")]
    Custom(String),
}

impl GenServerError {
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        GenServerError::Custom(msg.to_string())
    }
}
