//! Handles returned to callers that start a process.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::pid::Pid;
use crate::reason::Reason;

/// Called exactly once when a `start_link`ed actor exits, with its address
/// and exit reason. A panic inside the callback itself is caught and logged
/// by the driver, never propagated — see `actor::driver`'s module doc for
/// how this differs from a panic inside the actor being reported on.
pub type OnExit = Arc<dyn Fn(Pid, Reason) + Send + Sync>;

/// Returned by [`crate::actor::spawn_link`]: an address plus the scope
/// needed to cancel the actor from outside.
#[derive(Clone)]
pub struct ActorHandle {
    pid: Pid,
    cancel_scope: CancellationToken,
}

impl ActorHandle {
    pub(crate) fn new(pid: Pid, cancel_scope: CancellationToken) -> Self {
        Self { pid, cancel_scope }
    }

    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    /// The cancellation scope governing this actor, for callers (like a
    /// supervisor) that need to hold onto it without tripping it immediately.
    pub fn cancel_scope(&self) -> CancellationToken {
        self.cancel_scope.clone()
    }

    /// Trip this actor's cancellation scope; it will wind down at its next
    /// suspension point.
    pub fn cancel(&self) {
        self.cancel_scope.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_scope.is_cancelled()
    }
}
