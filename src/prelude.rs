//! Convenient imports for building on top of this runtime.
//!
//! ```rust,ignore
//! use aegis_rt::prelude::*;
//! ```
//!
//! # What's Included
//!
//! ## Core Actor System
//! - [`Actor`] / [`ActorFlow`] / [`ActorHandle`] / [`DynActor`]
//! - [`spawn`] / [`spawn_link`] / [`spawn_link_dyn`]
//! - [`TaskGroup`]
//!
//! ## Messaging
//! - [`send`] / [`cast`] / [`call`] / [`call_default`]
//! - [`Pid`] / [`Ref`] / [`Message`] / [`Term`] / [`Protocol`]
//! - [`Pattern`]
//!
//! ## Generic Server
//! - [`GenServer`] / [`GenServerDriver`] / [`GenServerContext`] / [`GenServerError`]
//!
//! ## Supervision
//! - [`Supervisor`] / [`ChildSpec`] / [`RestartPolicy`] / [`SupervisionStrategy`]
//! - [`SupervisorCommand`] / [`SupervisorReply`] / [`SupervisorError`]
//!
//! ## Registry
//! - [`registry`] free functions: `register`, `unregister`, `whereis`, `registered`
//!
//! ## Monitoring
//! - [`Monitor`] / [`InMemoryMonitor`] / [`NoopMonitor`] / [`EventSeverity`]
//! - [`ActorEvent`] / [`MailboxEvent`] / [`SupervisionEvent`] / [`RegistryEvent`]
//!
//! ## Errors & Config
//! - [`RuntimeError`] / [`Reason`] / [`RuntimeConfig`]

// Core actor system
pub use crate::actor::{spawn, spawn_link, spawn_link_dyn, Actor, ActorError, ActorFlow, ActorHandle, DynActor, OnExit};
pub use crate::task_group::TaskGroup;

// Messaging
pub use crate::mailbox::{MailboxReceiver, Selector};
pub use crate::messaging::{call, call_default, cast, send};
pub use crate::pattern::Pattern;
pub use crate::pid::Pid;
pub use crate::protocol::Protocol;
pub use crate::reason::Reason;
pub use crate::reference::Ref;
pub use crate::term::{Message, Term};

// Generic server
pub use crate::genserver::{GenServer, GenServerContext, GenServerDriver, GenServerError};

// Supervision
pub use crate::supervisor::{
    ChildSpec, RestartPolicy, SupervisionStrategy, Supervisor, SupervisorCommand, SupervisorError,
    SupervisorReply,
};

// Registry
pub use crate::registry::{self, Registry};

// Monitoring
pub use crate::monitoring::{
    ActorEvent, EventSeverity, InMemoryMonitor, MailboxEvent, Monitor, MonitoringEvent,
    NoopMonitor, RegistryEvent, SupervisionEvent,
};

// Errors & config
pub use crate::config::{RuntimeConfig, SupervisorConfig};
pub use crate::error::RuntimeError;
