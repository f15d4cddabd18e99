//! Supervision: restart children under a declarative policy, rate-limited
//! against restart storms.
//!
//! Grounded directly on the teacher's `supervisor::{types, strategy, backoff,
//! errors}` modules, recomposed as a [`crate::genserver::GenServer`] rather
//! than the teacher's own bespoke `tree.rs` control loop.

mod backoff;
mod error;
mod node;
mod strategy;
mod types;

pub use backoff::RestartBackoff;
pub use error::SupervisorError;
pub use node::{Supervisor, SupervisorCommand, SupervisorReply};
pub use strategy::SupervisionStrategy;
pub use types::{ChildSpec, RestartPolicy};
