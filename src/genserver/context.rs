//! The context handed to every `GenServer` hook.

use std::future::Future;

use crate::messaging::send;
use crate::pid::Pid;
use crate::protocol::Protocol;
use crate::reason::Reason;
use crate::task_group::TaskGroup;
use crate::term::{Message, Term};

/// Per-actor state threaded through every `GenServer` handler: this
/// process's own address and the scope its background tasks are spawned
/// into.
pub struct GenServerContext {
    pid: Pid,
    tasks: TaskGroup,
}

impl GenServerContext {
    pub(crate) fn new(pid: Pid, tasks: TaskGroup) -> Self {
        Self { pid, tasks }
    }

    /// This process's own address.
    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut TaskGroup {
        &mut self.tasks
    }

    /// Spawn `future` as a child task bound to this `GenServer`'s lifetime.
    /// On completion it posts `Protocol::TaskSuccess`/`Protocol::TaskFailure`
    /// back into this process's own mailbox, consumed through
    /// `handle_task_success`/`handle_task_failure`. Cancelled automatically
    /// when this `GenServer` terminates.
    pub fn start_background_task<F, T>(&mut self, future: F) -> Pid
    where
        F: Future<Output = Result<T, Reason>> + Send + 'static,
        T: Message,
    {
        let (throwaway_tx, _throwaway_rx) = crate::mailbox::channel();
        let task_pid = Pid::new(throwaway_tx);
        let reply_to = self.pid.clone();
        let outcome_pid = task_pid.clone();
        let token = self.tasks.child_token();

        self.tasks.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                result = future => match result {
                    Ok(value) => send(&reply_to, Protocol::<Term>::TaskSuccess(outcome_pid, Term::value(value))),
                    Err(reason) => send(&reply_to, Protocol::<Term>::TaskFailure(outcome_pid, reason)),
                },
            }
        });

        task_pid
    }
}
