//! Structured-concurrency spawn scope.
//!
//! Generalized from the teacher's `system::actor_system` spawn bookkeeping
//! (which tracks actor tasks inline on `ActorSystem`) into a standalone,
//! reusable scope: a [`tokio::task::JoinSet`] paired with a hierarchical
//! [`tokio_util::sync::CancellationToken`]. No task in this crate is ever
//! spawned outside one — `start`/`start_link` require a `&TaskGroup`
//! argument precisely to make that lexical.

use std::future::Future;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// An owned scope that tasks are spawned into.
///
/// Dropping a `TaskGroup` aborts every task still registered in its
/// `JoinSet` and cancels its token, which cascades to every child token
/// handed out via [`TaskGroup::child_token`] or [`TaskGroup::child`].
pub struct TaskGroup {
    tasks: JoinSet<()>,
    token: CancellationToken,
}

impl TaskGroup {
    /// A new, unlinked root scope.
    pub fn new() -> Self {
        Self {
            tasks: JoinSet::new(),
            token: CancellationToken::new(),
        }
    }

    /// A scope whose cancellation is linked to `parent`'s: cancelling
    /// `parent` cancels this group too, but not vice versa.
    pub fn child(parent: &TaskGroup) -> Self {
        Self {
            tasks: JoinSet::new(),
            token: parent.token.child_token(),
        }
    }

    /// The cancellation token governing every task in this group.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// A token cancelled whenever this group's token is (but independently
    /// cancellable without affecting this group).
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Spawn a future into this group.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn(future);
    }

    /// Signal cancellation to every task in this group (and its
    /// descendants) without waiting for them to finish.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancel and wait for every spawned task to finish.
    pub async fn shutdown(&mut self) {
        self.token.cancel();
        while self.tasks.join_next().await.is_some() {}
    }

    /// Number of tasks still registered in this group.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskGroup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn cancelling_a_group_trips_its_child_tokens() {
        let group = TaskGroup::new();
        let child = group.child_token();
        assert!(!child.is_cancelled());
        group.cancel();
        assert!(child.is_cancelled());
    }

    #[tokio::test]
    async fn child_group_is_cancelled_by_parent() {
        let parent = TaskGroup::new();
        let child = TaskGroup::child(&parent);
        assert!(!child.token().is_cancelled());
        parent.cancel();
        assert!(child.token().is_cancelled());
    }

    #[tokio::test]
    async fn shutdown_waits_for_spawned_tasks() {
        let mut group = TaskGroup::new();
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let token = group.child_token();
        group.spawn(async move {
            token.cancelled().await;
            flag.store(true, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        group.shutdown().await;
        assert!(ran.load(Ordering::SeqCst));
    }
}
