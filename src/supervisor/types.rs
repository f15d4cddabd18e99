//! Child specifications, restart policy, and the supervisor's private
//! bookkeeping record for each running child.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::actor::DynActor;
use crate::pid::Pid;
use crate::reason::Reason;

/// When a supervisor restarts a child after it exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Always restart, regardless of exit reason.
    Permanent,
    /// Restart only on an abnormal exit (`Reason::Error`).
    Transient,
    /// Never restart.
    Temporary,
}

impl RestartPolicy {
    /// Whether a child exiting with `reason` qualifies for a restart under
    /// this policy.
    pub fn should_restart(&self, reason: &Reason) -> bool {
        match self {
            RestartPolicy::Permanent => true,
            RestartPolicy::Temporary => false,
            RestartPolicy::Transient => reason.is_error(),
        }
    }
}

/// The Rust analogue of `actor_class` + constructor arguments: a boxed
/// factory closure captures whatever a child needs to build itself fresh
/// on every (re)start.
#[derive(Clone)]
pub struct ChildSpec {
    pub(crate) id: String,
    pub(crate) factory: Arc<dyn Fn() -> Box<dyn DynActor> + Send + Sync>,
    pub(crate) restart: RestartPolicy,
}

impl ChildSpec {
    /// Build a spec for an actor type `A`, constructed fresh via `factory`
    /// on every start and restart.
    pub fn new<A, F>(id: impl Into<String>, restart: RestartPolicy, factory: F) -> Self
    where
        A: DynActor + 'static,
        F: Fn() -> A + Send + Sync + 'static,
    {
        ChildSpec {
            id: id.into(),
            factory: Arc::new(move || Box::new(factory()) as Box<dyn DynActor>),
            restart,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn restart(&self) -> RestartPolicy {
        self.restart
    }
}

/// The supervisor's live record of one running child, keyed by `ChildSpec::id`.
pub(crate) struct ChildEntry {
    pub pid: Pid,
    pub cancel_scope: CancellationToken,
    pub spec_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanent_always_restarts() {
        assert!(RestartPolicy::Permanent.should_restart(&Reason::Normal));
        assert!(RestartPolicy::Permanent.should_restart(&Reason::from_error("boom")));
    }

    #[test]
    fn temporary_never_restarts() {
        assert!(!RestartPolicy::Temporary.should_restart(&Reason::Normal));
        assert!(!RestartPolicy::Temporary.should_restart(&Reason::from_error("boom")));
    }

    #[test]
    fn transient_restarts_only_on_error() {
        assert!(!RestartPolicy::Transient.should_restart(&Reason::Normal));
        assert!(RestartPolicy::Transient.should_restart(&Reason::from_error("boom")));
    }
}
