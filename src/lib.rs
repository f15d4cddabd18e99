//! # aegis-rt — a lightweight, BEAM-inspired actor runtime
//!
//! Addressable processes with private mailboxes and selective receive, a
//! generic-server template for structured request/reply and fire-and-forget
//! interactions, supervisors that restart failed children under declarative
//! policies, and a local name registry — all on top of `tokio`, for a single
//! host.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aegis_rt::prelude::*;
//! use async_trait::async_trait;
//!
//! #[derive(Debug, Clone)]
//! enum CounterMsg {
//!     Increment(u32),
//!     Get,
//! }
//!
//! struct Counter {
//!     value: u32,
//! }
//!
//! #[async_trait]
//! impl GenServer for Counter {
//!     type Request = CounterMsg;
//!     type Reply = u32;
//!
//!     async fn handle_call(
//!         &mut self,
//!         request: Self::Request,
//!         _reference: &Ref,
//!         _ctx: &mut GenServerContext,
//!     ) -> Result<(Self::Reply, ActorFlow), GenServerError> {
//!         match request {
//!             CounterMsg::Get => Ok((self.value, ActorFlow::Continue)),
//!             CounterMsg::Increment(_) => Err(GenServerError::custom("call does not take Increment")),
//!         }
//!     }
//!
//!     async fn handle_cast(
//!         &mut self,
//!         request: Self::Request,
//!         _ctx: &mut GenServerContext,
//!     ) -> Result<ActorFlow, GenServerError> {
//!         if let CounterMsg::Increment(by) = request {
//!             self.value += by;
//!         }
//!         Ok(ActorFlow::Continue)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut group = TaskGroup::new();
//!     let pid = spawn(GenServerDriver::new(Counter { value: 0 }), &mut group).await;
//!     cast(&pid, CounterMsg::Increment(5));
//!     let total: u32 = call_default(&pid, CounterMsg::Get).await.unwrap();
//!     assert_eq!(total, 5);
//! }
//! ```
//!
//! # Module Organization
//!
//! ## Core
//! - [`pid`] / [`reference`] — process identity and call-correlation tokens
//! - [`pattern`] — the selective-receive structural matcher
//! - [`mailbox`] — FIFO buffer, selective receive, timeout
//! - [`actor`] — lifecycle driver, cancellation, failure-to-exit translation
//! - [`messaging`] — `send`/`cast`/`call` and the reply-waiting protocol
//! - [`genserver`] — call/cast/info dispatch on top of [`actor`]
//! - [`protocol`] — the closed wire-shape enum every process understands
//!
//! ## Fault Tolerance
//! - [`supervisor`] — restart strategies, policies, rate limiting
//! - [`registry`] — the process-wide name→[`pid::Pid`] map
//!
//! ## Ambient
//! - [`monitoring`] — structured event observation (this crate's substitute for `tracing`)
//! - [`config`] — [`config::RuntimeConfig`] defaults
//! - [`task_group`] — the structured-concurrency spawn scope
//! - [`error`] — [`error::RuntimeError`], the top-level aggregated error type
//! - [`reason`] — [`reason::Reason`], the exit-reason carried by every actor

pub mod actor;
pub mod config;
pub mod error;
pub mod genserver;
pub mod mailbox;
pub mod messaging;
pub mod monitoring;
pub mod pattern;
pub mod pid;
pub mod protocol;
pub mod reason;
pub mod reference;
pub mod registry;
pub mod supervisor;
pub mod task_group;
pub mod term;

pub mod prelude;

pub use actor::{spawn, spawn_link, spawn_link_dyn, Actor, ActorError, ActorFlow, ActorHandle, ActorState, DynActor, OnExit};
pub use config::{RuntimeConfig, SupervisorConfig};
pub use error::RuntimeError;
pub use genserver::{GenServer, GenServerContext, GenServerDriver, GenServerError};
pub use mailbox::{MailboxError, MailboxReceiver, MailboxSender, Selector};
pub use messaging::{call, call_default, cast, send};
pub use monitoring::{
    ActorEvent, ActorEventKind, EventSeverity, InMemoryMonitor, MailboxEvent, MailboxEventKind,
    Monitor, MonitoringConfig, MonitoringError, MonitoringEvent, MonitoringSnapshot, NoopMonitor,
    RegistryEvent, RegistryEventKind, SupervisionEvent, SupervisionEventKind,
};
pub use pattern::Pattern;
pub use pid::Pid;
pub use protocol::Protocol;
pub use reason::Reason;
pub use reference::Ref;
pub use registry::Registry;
pub use supervisor::{ChildSpec, RestartBackoff, RestartPolicy, SupervisionStrategy, Supervisor, SupervisorCommand, SupervisorError, SupervisorReply};
pub use task_group::TaskGroup;
pub use term::{Message, Term};
