//! The supervisor: a `GenServer` that owns a fixed list of children, starts
//! them, and restarts them under its configured strategy and rate limit.
//!
//! Grounded on the teacher's `supervisor::types`/`strategy`/`backoff`
//! modules for the restart bookkeeping; the `node.rs` control loop itself is
//! novel — generalized onto this crate's `GenServer`/`Protocol` machinery
//! rather than the teacher's own `tree.rs`/builder machinery, which solves a
//! broader health-monitoring problem this spec doesn't ask for.

use std::sync::Arc;

use async_trait::async_trait;

use crate::actor::{spawn_link_dyn, ActorHandle, OnExit};
use crate::config::SupervisorConfig;
use crate::genserver::{GenServer, GenServerContext, GenServerError};
use crate::messaging::send;
use crate::pid::Pid;
use crate::protocol::Protocol;
use crate::reason::Reason;
use crate::task_group::TaskGroup;
use crate::term::Term;

use super::backoff::RestartBackoff;
use super::error::SupervisorError;
use super::strategy::SupervisionStrategy;
use super::types::{ChildEntry, ChildSpec, RestartPolicy};

/// The request surface a supervisor's own `call`/`cast` clients speak.
/// Distinct from the `Protocol::ChildDown` traffic the supervisor receives
/// internally from its children's `on_exit` callbacks, which arrives as
/// plain `Protocol<Term>` info and never passes through this type.
#[derive(Debug, Clone)]
pub enum SupervisorCommand {
    TerminateChild(String),
    RestartChild(String),
    WhichChildren,
    CountChildren,
}

#[derive(Debug, Clone)]
pub enum SupervisorReply {
    Ack,
    Children(Vec<(String, Pid, RestartPolicy)>),
    Count(usize),
}

/// A `GenServer` whose state is a fixed, ordered set of [`ChildSpec`]s,
/// started in [`GenServer::init`] and supervised for the server's lifetime.
pub struct Supervisor {
    specs: Vec<ChildSpec>,
    strategy: SupervisionStrategy,
    children_group: TaskGroup,
    entries: Vec<Option<ChildEntry>>,
    backoff: RestartBackoff,
    own_pid: Option<Pid>,
}

impl Supervisor {
    /// Build a supervisor over `specs`, started and restarted in the given
    /// order, under `strategy`, allowing up to `max_restarts` restarts in
    /// any trailing `max_seconds`-second window before failing itself with
    /// [`SupervisorError::MaxRestartsExceeded`].
    pub fn new(
        specs: Vec<ChildSpec>,
        strategy: SupervisionStrategy,
        max_restarts: u32,
        max_seconds: f64,
    ) -> Self {
        let len = specs.len();
        Supervisor {
            specs,
            strategy,
            children_group: TaskGroup::new(),
            entries: (0..len).map(|_| None).collect(),
            backoff: RestartBackoff::new(max_restarts, max_seconds),
            own_pid: None,
        }
    }

    /// As [`Supervisor::new`], taking its restart budget from a
    /// [`SupervisorConfig`] rather than two bare numbers — the form to reach
    /// for when a process tree shares one configuration rather than hand-
    /// tuning every supervisor at its call site.
    pub fn with_config(specs: Vec<ChildSpec>, strategy: SupervisionStrategy, config: SupervisorConfig) -> Self {
        Self::new(specs, strategy, config.max_restarts, config.max_seconds)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id == id)
    }

    fn on_exit_for(&self, spec_id: String) -> OnExit {
        let supervisor_pid = self
            .own_pid
            .clone()
            .unwrap_or_else(|| unreachable!("on_exit_for called before init set own_pid"));
        Arc::new(move |pid, reason| {
            send(
                &supervisor_pid,
                Protocol::<Term>::ChildDown(spec_id.clone(), pid, reason),
            );
        })
    }

    async fn start_one(&mut self, index: usize) -> Result<(), GenServerError> {
        let spec = &self.specs[index];
        let actor = (spec.factory)();
        let on_exit = self.on_exit_for(spec.id.clone());
        let handle: ActorHandle = spawn_link_dyn(actor, &mut self.children_group, Some(on_exit))
            .await
            .map_err(|reason| {
                GenServerError::custom(SupervisorError::ChildStartFailed {
                    id: spec.id.clone(),
                    reason: reason.to_string(),
                })
            })?;
        self.entries[index] = Some(ChildEntry {
            pid: handle.pid().clone(),
            cancel_scope: handle.cancel_scope(),
            spec_index: index,
        });
        Ok(())
    }

    fn cancel_entry(&mut self, index: usize) {
        if let Some(entry) = self.entries[index].take() {
            entry.cancel_scope.cancel();
        }
    }

    async fn restart_indices(&mut self, indices: &[usize]) -> Result<(), GenServerError> {
        for &index in indices {
            self.cancel_entry(index);
        }
        for &index in indices {
            self.backoff
                .record_restart()
                .map_err(GenServerError::custom)?;
            self.start_one(index).await?;
        }
        Ok(())
    }

    fn children_snapshot(&self) -> Vec<(String, Pid, RestartPolicy)> {
        self.entries
            .iter()
            .filter_map(|entry| {
                entry.as_ref().map(|e| {
                    let spec = &self.specs[e.spec_index];
                    (spec.id.clone(), e.pid.clone(), spec.restart)
                })
            })
            .collect()
    }
}

#[async_trait]
impl GenServer for Supervisor {
    type Request = SupervisorCommand;
    type Reply = SupervisorReply;

    async fn init(&mut self, ctx: &mut GenServerContext) -> Result<(), GenServerError> {
        self.own_pid = Some(ctx.pid().clone());
        for index in 0..self.specs.len() {
            if let Err(err) = self.start_one(index).await {
                // Roll back every child already started.
                for started in 0..index {
                    self.cancel_entry(started);
                }
                self.children_group.cancel();
                return Err(err);
            }
        }
        Ok(())
    }

    async fn handle_call(
        &mut self,
        request: Self::Request,
        _reference: &crate::reference::Ref,
        _ctx: &mut GenServerContext,
    ) -> Result<(Self::Reply, crate::actor::ActorFlow), GenServerError> {
        use crate::actor::ActorFlow;
        match request {
            SupervisorCommand::WhichChildren => {
                Ok((SupervisorReply::Children(self.children_snapshot()), ActorFlow::Continue))
            }
            SupervisorCommand::CountChildren => {
                let count = self.entries.iter().filter(|e| e.is_some()).count();
                Ok((SupervisorReply::Count(count), ActorFlow::Continue))
            }
            SupervisorCommand::TerminateChild(_) | SupervisorCommand::RestartChild(_) => {
                Err(GenServerError::UnhandledCall)
            }
        }
    }

    async fn handle_cast(
        &mut self,
        request: Self::Request,
        _ctx: &mut GenServerContext,
    ) -> Result<crate::actor::ActorFlow, GenServerError> {
        use crate::actor::ActorFlow;
        match request {
            SupervisorCommand::TerminateChild(id) => {
                match self.index_of(&id) {
                    Some(index) => {
                        self.cancel_entry(index);
                        Ok(ActorFlow::Continue)
                    }
                    None => Err(GenServerError::custom(SupervisorError::UnknownChild(id))),
                }
            }
            SupervisorCommand::RestartChild(id) => match self.index_of(&id) {
                Some(index) => {
                    self.restart_indices(&[index]).await?;
                    Ok(ActorFlow::Continue)
                }
                None => Err(GenServerError::custom(SupervisorError::UnknownChild(id))),
            },
            SupervisorCommand::WhichChildren | SupervisorCommand::CountChildren => {
                Ok(ActorFlow::Continue)
            }
        }
    }

    async fn handle_info(
        &mut self,
        message: Term,
        _ctx: &mut GenServerContext,
    ) -> Result<crate::actor::ActorFlow, GenServerError> {
        use crate::actor::ActorFlow;
        let Some(down) = message.downcast::<Protocol<Term>>() else {
            return Ok(ActorFlow::Continue);
        };
        let Protocol::ChildDown(child_id, pid, reason) = down else {
            return Ok(ActorFlow::Continue);
        };

        let Some(index) = self.index_of(&child_id) else {
            return Ok(ActorFlow::Continue);
        };

        let current_pid = self.entries[index].as_ref().map(|e| &e.pid);
        if current_pid != Some(&pid) {
            // Stale exit from a prior instance already replaced by a restart.
            return Ok(ActorFlow::Continue);
        }

        let spec = &self.specs[index];
        if !spec.restart.should_restart(&reason) {
            self.entries[index] = None;
            return Ok(ActorFlow::Continue);
        }

        let affected = self.strategy.affected(index, self.specs.len());
        match self.restart_indices(&affected).await {
            Ok(()) => Ok(ActorFlow::Continue),
            Err(err) => Err(err),
        }
    }

    async fn terminate(&mut self, _reason: &Reason) {
        self.children_group.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Actor, ActorFlow};
    use crate::genserver::GenServerDriver;
    use crate::mailbox::{MailboxReceiver, Selector};
    use crate::messaging::call;
    use crate::pattern::Pattern;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    struct FailsOnce {
        armed: Arc<AtomicBool>,
    }

    #[async_trait::async_trait]
    impl Actor for FailsOnce {
        type Error = std::io::Error;

        async fn run(&mut self, _pid: &Pid, mailbox: &mut MailboxReceiver) -> Result<ActorFlow, Self::Error> {
            if self.armed.swap(false, Ordering::SeqCst) {
                return Err(std::io::Error::other("boom"));
            }
            let _ = mailbox
                .receive(vec![Selector::pattern(Pattern::any(), |_| async {})], None)
                .await;
            Ok(ActorFlow::Continue)
        }
    }

    #[tokio::test]
    async fn one_for_one_restarts_only_the_failed_child_and_survives() {
        let armed = Arc::new(AtomicBool::new(true));
        let spec_armed = Arc::clone(&armed);
        let spec = ChildSpec::new("worker", RestartPolicy::Permanent, move || FailsOnce {
            armed: Arc::clone(&spec_armed),
        });

        let mut group = TaskGroup::new();
        let supervisor = Supervisor::new(vec![spec], SupervisionStrategy::OneForOne, 3, 5.0);
        let pid = crate::actor::spawn(GenServerDriver::new(supervisor), &mut group).await;

        tokio::time::sleep(Duration::from_millis(50)).await;

        let reply: SupervisorReply = call(&pid, SupervisorCommand::WhichChildren, Duration::from_secs(1))
            .await
            .expect("reply");
        match reply {
            SupervisorReply::Children(children) => {
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].0, "worker");
            }
            _ => panic!("expected Children reply"),
        }
    }

    #[tokio::test]
    async fn with_config_applies_the_configured_restart_budget() {
        let armed = Arc::new(AtomicBool::new(true));
        let spec = ChildSpec::new("worker", RestartPolicy::Permanent, move || FailsOnce {
            armed: Arc::clone(&armed),
        });

        let config = crate::config::SupervisorConfig {
            max_restarts: 0,
            max_seconds: 5.0,
        };
        let mut group = TaskGroup::new();
        let supervisor = Supervisor::with_config(vec![spec], SupervisionStrategy::OneForOne, config);
        let pid = crate::actor::spawn(GenServerDriver::new(supervisor), &mut group).await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(pid.is_closed());
    }

    #[tokio::test]
    async fn temporary_child_is_not_restarted_after_failure() {
        let armed = Arc::new(AtomicBool::new(true));
        let spec = ChildSpec::new("worker", RestartPolicy::Temporary, move || FailsOnce {
            armed: Arc::clone(&armed),
        });

        let mut group = TaskGroup::new();
        let supervisor = Supervisor::new(vec![spec], SupervisionStrategy::OneForOne, 3, 5.0);
        let pid = crate::actor::spawn(GenServerDriver::new(supervisor), &mut group).await;

        tokio::time::sleep(Duration::from_millis(50)).await;

        let reply: SupervisorReply = call(&pid, SupervisorCommand::CountChildren, Duration::from_secs(1))
            .await
            .expect("reply");
        assert!(matches!(reply, SupervisorReply::Count(0)));
    }
}
