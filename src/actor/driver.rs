//! The actor driver loop: owns a spawned process's task body.
//!
//! Grounded on the teacher's `ActorLifecycle`/`actor_system` spawn
//! bookkeeping for the overall shape (own a state, race cancellation,
//! notify on exit), generalized to drive any [`DynActor`] rather than a
//! single concrete, generically-typed actor.
//!
//! Panics inside a handler (`init`/`run`/`terminate`) are deliberately *not*
//! caught here — doing so would require a `catch_unwind`-over-futures
//! dependency the teacher's stack doesn't carry. A panic unwinds the owning
//! task; whoever polls that task's `JoinSet` slot (a `TaskGroup`, typically
//! owned by a supervisor) observes a `JoinError` and treats it exactly like a
//! `Reason::Error` exit — see `supervisor::node`. `on_exit` therefore only
//! fires for ordinary (non-panicking) actor exits; this is recorded as a
//! deliberate scope decision in `DESIGN.md`.
//!
//! The `on_exit` callback itself is user code invoked from inside this
//! driver task, so a panic in it is caught with `catch_unwind` and logged
//! rather than left to unwind the driver — that guarantee is specific to the
//! callback, not to the actor it reports on.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use super::{Actor, ActorError, ActorFlow, ActorHandle, DynActor, OnExit};
use crate::mailbox::{channel, MailboxReceiver};
use crate::pid::Pid;
use crate::reason::Reason;
use crate::task_group::TaskGroup;

/// Invoke `on_exit`, catching and logging a panic rather than letting it
/// unwind this driver task.
fn run_on_exit(callback: &OnExit, pid: Pid, reason: Reason) {
    let result = catch_unwind(AssertUnwindSafe(|| callback(pid, reason)));
    if let Err(payload) = result {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        eprintln!("aegis-rt: on_exit callback panicked: {message}");
    }
}

/// Drive one process to completion: `init`, then repeated `run` until
/// `Stop`/`Err`/cancellation, then `terminate`, then the `on_exit` callback.
pub async fn run_driver(
    mut actor: Box<dyn DynActor>,
    mut mailbox: MailboxReceiver,
    token: CancellationToken,
    pid: Pid,
    on_exit: Option<OnExit>,
    ready: oneshot::Sender<Result<(), Reason>>,
) {
    let init_result = tokio::select! {
        biased;
        _ = token.cancelled() => Err(Reason::Normal),
        result = actor.init(&pid) => result,
    };

    if let Err(reason) = init_result {
        let _ = ready.send(Err(reason.clone()));
        actor.terminate(&reason).await;
        if let Some(callback) = on_exit {
            run_on_exit(&callback, pid, reason);
        }
        return;
    }
    let _ = ready.send(Ok(()));

    let reason = loop {
        let flow = tokio::select! {
            biased;
            _ = token.cancelled() => break Reason::Normal,
            result = actor.run(&pid, &mut mailbox) => result,
        };
        match flow {
            Ok(ActorFlow::Continue) => continue,
            Ok(ActorFlow::Stop) => break Reason::Normal,
            Err(reason) => break reason,
        }
    };

    actor.terminate(&reason).await;
    if let Some(callback) = on_exit {
        run_on_exit(&callback, pid, reason);
    }
}

async fn spawn_dyn(
    actor: Box<dyn DynActor>,
    group: &mut TaskGroup,
    on_exit: Option<OnExit>,
) -> Result<ActorHandle, Reason> {
    let (sender, receiver) = channel();
    let pid = Pid::new(sender);
    let token = group.child_token();
    let (ready_tx, ready_rx) = oneshot::channel();

    let driver_pid = pid.clone();
    let driver_token = token.clone();
    group.spawn(async move {
        run_driver(actor, receiver, driver_token, driver_pid, on_exit, ready_tx).await;
    });

    // Open Question (a): wait for init to finish before returning, so the
    // caller always observes a fully-initialized (or cleanly-failed) actor.
    match ready_rx.await {
        Ok(Ok(())) => Ok(ActorHandle::new(pid, token)),
        Ok(Err(reason)) => Err(reason),
        Err(_) => Err(Reason::from_error(ActorError::ReadinessChannelClosed)),
    }
}

/// Spawn `actor` into `group`, returning its address once `init` has run.
/// An `init` failure is not distinguishable from success here; callers that
/// need that distinction should use [`spawn_link_dyn`].
pub async fn spawn<A: Actor>(actor: A, group: &mut TaskGroup) -> Pid {
    let (sender, receiver) = channel();
    let pid = Pid::new(sender);
    let token = group.child_token();
    let (ready_tx, ready_rx) = oneshot::channel();
    let driver_pid = pid.clone();
    group.spawn(async move {
        run_driver(Box::new(actor), receiver, token, driver_pid, None, ready_tx).await;
    });
    let _ = ready_rx.await;
    pid
}

/// Spawn `actor` into `group`, returning a handle that exposes its
/// cancellation scope. `on_exit`, if given, runs exactly once when the actor
/// exits (see the module-level panic caveat). An `init` failure is not
/// distinguishable from success here; callers that need that distinction
/// should use [`spawn_link_dyn`].
pub async fn spawn_link<A: Actor>(
    actor: A,
    group: &mut TaskGroup,
    on_exit: Option<OnExit>,
) -> ActorHandle {
    match spawn_dyn(Box::new(actor), group, on_exit).await {
        Ok(handle) => handle,
        Err(_) => {
            // init failed; construct a handle over an already-cancelled
            // scope so callers that ignore the (impossible to express here
            // without breaking the infallible signature) failure still get
            // something well-formed to hold.
            let token = group.child_token();
            token.cancel();
            let (sender, _receiver) = channel();
            ActorHandle::new(Pid::new(sender), token)
        }
    }
}

/// As [`spawn_link`], for callers that only have a type-erased
/// [`DynActor`] in hand — namely `ChildSpec`'s boxed factory, which produces
/// heterogeneous children behind one pointer. Unlike `spawn`/`spawn_link`,
/// an `init` failure is surfaced to the caller, since a supervisor needs it
/// to decide whether to roll back already-started siblings.
pub async fn spawn_link_dyn(
    actor: Box<dyn DynActor>,
    group: &mut TaskGroup,
    on_exit: Option<OnExit>,
) -> Result<ActorHandle, Reason> {
    spawn_dyn(actor, group, on_exit).await
}
