//! Top-level error aggregation.
//!
//! Shape grounded on the teacher's `system::errors::SystemError`: a
//! `thiserror` enum aggregating every subsystem's error type via `#[from]`,
//! with `is_transient`/`is_fatal` helper predicates callers can branch on
//! without matching every variant by hand.

use thiserror::Error;

use crate::actor::ActorError;
use crate::genserver::GenServerError;
use crate::mailbox::MailboxError;
use crate::supervisor::SupervisorError;

/// The crate's aggregated error type.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error(transparent)]
    Mailbox(#[from] MailboxError),

    #[error(transparent)]
    GenServer(#[from] GenServerError),

    #[error(transparent)]
    Supervisor(#[from] SupervisorError),

    /// `call`'s ephemeral mailbox did not see a correlated reply before the
    /// deadline.
    #[error("call timed out waiting for a reply")]
    ReceiveTimeout,

    /// A reply arrived but was not of the type the caller downcast to, or
    /// not a `Protocol::Reply` at all. Should not happen in practice since
    /// an ephemeral reply mailbox has exactly one producer, but is surfaced
    /// rather than silently swallowed.
    #[error("call received a reply that did not match the expected shape")]
    UnexpectedReply,
}

impl RuntimeError {
    /// `true` for failures a caller can reasonably retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RuntimeError::ReceiveTimeout | RuntimeError::Mailbox(MailboxError::ReceiveTimeout)
        )
    }

    /// `true` for failures that indicate a process is gone for good.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RuntimeError::Supervisor(SupervisorError::MaxRestartsExceeded { .. })
        )
    }
}
