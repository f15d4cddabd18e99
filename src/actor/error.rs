//! Driver-level failures, distinct from an actor's own `Actor::Error`.
//!
//! An actor's fallible handlers report through its associated `Actor::Error`
//! type, which has no single shape — it's a per-actor generic parameter, not
//! an enum this crate owns. `ActorError` instead covers failures in the
//! driver plumbing itself, which look the same no matter which actor is
//! running underneath.

use thiserror::Error;

/// Failures surfaced by the spawn/driver machinery rather than by an actor's
/// own handlers.
#[derive(Debug, Error)]
pub enum ActorError {
    /// The driver task exited (e.g. the runtime was shut down, or the task
    /// was aborted) before it could signal whether `init` succeeded.
    #[error("actor task dropped before signalling readiness")]
    ReadinessChannelClosed,
}
