//! Observability substrate: a typed `Monitor<E>` trait plus two
//! implementations, in place of a `tracing` dependency — grounded on the
//! teacher's own choice to roll a structured event monitor rather than
//! depend on `tracing`, even though the teacher's workspace offers it.
//!
//! Event families: [`types::SupervisionEvent`], [`types::ActorEvent`],
//! [`types::MailboxEvent`], [`types::RegistryEvent`]. Each implements
//! [`MonitoringEvent`] and carries its own severity and timestamp.

mod error;
mod in_memory;
mod noop;
mod traits;
mod types;

pub use error::MonitoringError;
pub use in_memory::InMemoryMonitor;
pub use noop::NoopMonitor;
pub use traits::{EventSeverity, Monitor, MonitoringEvent};
pub use types::{
    ActorEvent, ActorEventKind, MailboxEvent, MailboxEventKind, MonitoringConfig,
    MonitoringSnapshot, RegistryEvent, RegistryEventKind, SupervisionEvent, SupervisionEventKind,
};
