//! Actor lifecycle contract and driver.
//!
//! The `Actor` trait's three-hook shape (`init`/`run`/`terminate`) is
//! grounded on the teacher's `actor::traits::Actor` (`pre_start`/
//! `handle_message`/`post_stop`), generalized to object-safe `dyn` dispatch:
//! the teacher's trait is constrained by a generic `MessageBroker` type
//! parameter on its message-handling method, which makes it impossible to
//! store heterogeneous actors behind one pointer — exactly what
//! `ChildSpec`'s boxed factory needs. This crate drops the generic broker
//! parameter and routes every actor through its own concrete
//! [`crate::mailbox::MailboxReceiver`] instead.

mod driver;
mod error;
mod handle;

pub use driver::{run_driver, spawn, spawn_link, spawn_link_dyn};
pub use error::ActorError;
pub use handle::{ActorHandle, OnExit};

use async_trait::async_trait;

use crate::mailbox::MailboxReceiver;
use crate::pid::Pid;
use crate::reason::Reason;

/// What an actor's `run` iteration tells the driver to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorFlow {
    /// Re-enter `run`.
    Continue,
    /// Exit cleanly; `terminate` runs with `Reason::Normal`.
    Stop,
}

/// Coarse lifecycle state, mirroring the teacher's `ActorLifecycle` tracker
/// but with this crate's own state names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    PreInit,
    Initializing,
    Running,
    Terminating,
    Exited,
}

/// The behavior every running process implements.
///
/// `init` runs once; a failure there skips straight to `Terminating` with no
/// state available to `terminate`. `run` is invoked repeatedly and must
/// perform at least one suspension (normally a mailbox `receive`) per call.
#[async_trait]
pub trait Actor: Send + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// `pid` is this actor's own address — useful for registering with a
    /// supervisor, handing out to children, or stamping outgoing protocol
    /// messages with a reply-to address.
    async fn init(&mut self, pid: &Pid) -> Result<(), Self::Error> {
        let _ = pid;
        Ok(())
    }

    async fn run(&mut self, pid: &Pid, mailbox: &mut MailboxReceiver) -> Result<ActorFlow, Self::Error>;

    /// Invoked on every exit path where the runtime has control. Infallible
    /// by contract: errors and panics here are caught and logged, never
    /// propagated.
    async fn terminate(&mut self, _reason: &Reason) {}
}

/// Object-safe, type-erased facade over [`Actor`], auto-implemented for every
/// `Actor`. `ChildSpec`'s factory produces these so a supervisor can hold
/// heterogeneous children behind one pointer.
#[async_trait]
pub trait DynActor: Send {
    async fn init(&mut self, pid: &Pid) -> Result<(), Reason>;
    async fn run(&mut self, pid: &Pid, mailbox: &mut MailboxReceiver) -> Result<ActorFlow, Reason>;
    async fn terminate(&mut self, reason: &Reason);
}

#[async_trait]
impl<A: Actor> DynActor for A {
    async fn init(&mut self, pid: &Pid) -> Result<(), Reason> {
        Actor::init(self, pid).await.map_err(Reason::from_error)
    }

    async fn run(&mut self, pid: &Pid, mailbox: &mut MailboxReceiver) -> Result<ActorFlow, Reason> {
        Actor::run(self, pid, mailbox).await.map_err(Reason::from_error)
    }

    async fn terminate(&mut self, reason: &Reason) {
        Actor::terminate(self, reason).await
    }
}
