//! Mailbox error types.
//!
//! Shape grounded on the teacher's `mailbox::traits::MailboxError`: a
//! `thiserror` enum with one variant per failure mode, no `Full`/`Closed`
//! variants carried over since this mailbox is unbounded and send-after-close
//! is a silent no-op rather than an error (§4.4 of the spec it implements).

use thiserror::Error;

/// Failure modes for [`super::MailboxReceiver::receive`].
#[derive(Debug, Error)]
pub enum MailboxError {
    /// No pattern matched a buffered or arriving message before the deadline.
    #[error("receive timed out before any pattern matched")]
    ReceiveTimeout,
}

impl MailboxError {
    /// Timeouts are always recoverable by the caller; never fatal.
    pub fn is_transient(&self) -> bool {
        matches!(self, MailboxError::ReceiveTimeout)
    }
}
