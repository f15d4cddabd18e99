//! Process identifiers.
//!
//! Grounded on the teacher's `util::ids::ActorId`/`ActorAddress` pattern: a
//! UUID-backed identity type, `Display`-able, cheap to clone and hash. Unlike
//! the teacher's `ActorId` (a bare identity with no routing capability), a
//! [`Pid`] also carries the handle needed to actually deliver a message —
//! this crate has no separate broker to look addresses up in.

use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

use crate::mailbox::MailboxSender;
use crate::term::Term;

/// An address for exactly one running process's mailbox.
///
/// Equality and hashing are over identity alone; the mailbox handle is
/// excluded, so two [`Pid`] clones obtained at different times still compare
/// equal. Cloning a `Pid` does not keep the referenced process alive —
/// dropping every clone has no effect on the actor it addresses.
#[derive(Clone)]
pub struct Pid {
    id: Uuid,
    sender: MailboxSender,
}

impl Pid {
    pub(crate) fn new(sender: MailboxSender) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
        }
    }

    /// The stable identity underlying this address.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Enqueue a term into this process's mailbox.
    ///
    /// Never fails: if the receiving half has already been dropped, the term
    /// is silently discarded (see [`crate::messaging::send`]).
    pub(crate) fn deliver(&self, term: Term) {
        self.sender.send(term);
    }

    /// `true` if the mailbox's receiving half has already been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pid").field(&self.id).finish()
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.id)
    }
}

impl PartialEq for Pid {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pid {}

impl Hash for Pid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailbox::channel;

    #[test]
    fn clones_compare_equal_by_identity() {
        let (tx, _rx) = channel();
        let pid = Pid::new(tx);
        let clone = pid.clone();
        assert_eq!(pid, clone);
        assert_eq!(pid.id(), clone.id());
    }

    #[test]
    fn distinct_pids_are_not_equal() {
        let (tx1, _rx1) = channel();
        let (tx2, _rx2) = channel();
        assert_ne!(Pid::new(tx1), Pid::new(tx2));
    }

    #[test]
    fn dropping_receiver_marks_sender_closed() {
        let (tx, rx) = channel();
        let pid = Pid::new(tx);
        assert!(!pid.is_closed());
        drop(rx);
        assert!(pid.is_closed());
    }
}
