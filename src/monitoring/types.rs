//! Monitoring event types and configuration structures.
//!
//! Reduced from the teacher's `monitoring::types` to the four event families
//! this crate's own components actually raise: supervision, actor lifecycle,
//! mailbox backpressure, and registry membership. The teacher's `BrokerEvent`/
//! `SystemEvent` describe a multi-actor-system/message-broker surface this
//! crate doesn't have and were dropped rather than adapted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::traits::{EventSeverity, MonitoringEvent};

/// Configuration for monitoring behavior.
#[derive(Debug, Clone, Serialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub max_history_size: usize,
    pub severity_filter: EventSeverity,
    pub snapshot_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_history_size: 1000,
            severity_filter: EventSeverity::Info,
            snapshot_interval_secs: 60,
        }
    }
}

/// Snapshot of monitoring state at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct MonitoringSnapshot<E: MonitoringEvent> {
    pub timestamp: DateTime<Utc>,
    pub total_events: u64,
    pub trace_count: u64,
    pub debug_count: u64,
    pub info_count: u64,
    pub warning_count: u64,
    pub error_count: u64,
    pub critical_count: u64,
    pub recent_events: Vec<E>,
}

// ============================================================================
// Supervision events
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SupervisionEvent {
    pub timestamp: DateTime<Utc>,
    pub supervisor_id: Uuid,
    pub child_id: Option<String>,
    pub event_kind: SupervisionEventKind,
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for SupervisionEvent {
    const EVENT_TYPE: &'static str = "supervision";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            SupervisionEventKind::ChildStarted => EventSeverity::Info,
            SupervisionEventKind::ChildStopped => EventSeverity::Info,
            SupervisionEventKind::ChildFailed { .. } => EventSeverity::Error,
            SupervisionEventKind::ChildRestarted { .. } => EventSeverity::Warning,
            SupervisionEventKind::RestartLimitExceeded { .. } => EventSeverity::Critical,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum SupervisionEventKind {
    ChildStarted,
    ChildStopped,
    ChildFailed { reason: String },
    ChildRestarted { strategy: String, affected_count: usize },
    RestartLimitExceeded { max_restarts: u32, max_seconds: f64 },
}

// ============================================================================
// Actor events
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ActorEvent {
    pub timestamp: DateTime<Utc>,
    pub actor_id: Uuid,
    pub event_kind: ActorEventKind,
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for ActorEvent {
    const EVENT_TYPE: &'static str = "actor";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            ActorEventKind::Spawned => EventSeverity::Debug,
            ActorEventKind::Started => EventSeverity::Info,
            ActorEventKind::ErrorOccurred { .. } => EventSeverity::Error,
            ActorEventKind::Stopped { .. } => EventSeverity::Info,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ActorEventKind {
    Spawned,
    Started,
    ErrorOccurred { reason: String },
    Stopped { normal: bool },
}

// ============================================================================
// Mailbox events
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MailboxEvent {
    pub timestamp: DateTime<Utc>,
    pub actor_id: Uuid,
    pub event_kind: MailboxEventKind,
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for MailboxEvent {
    const EVENT_TYPE: &'static str = "mailbox";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            MailboxEventKind::MessageEnqueued { .. } => EventSeverity::Trace,
            MailboxEventKind::MessageReceived { .. } => EventSeverity::Trace,
            MailboxEventKind::ReceiveTimedOut => EventSeverity::Warning,
            MailboxEventKind::DepthWarning { .. } => EventSeverity::Warning,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum MailboxEventKind {
    MessageEnqueued { queue_size: usize },
    MessageReceived { queue_size: usize },
    ReceiveTimedOut,
    /// Mailbox depth crossed [`MonitoringConfig`]'s warning threshold; purely
    /// informational, does not change receive/enqueue behavior.
    DepthWarning { queue_size: usize, threshold: usize },
}

// ============================================================================
// Registry events
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegistryEvent {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub event_kind: RegistryEventKind,
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for RegistryEvent {
    const EVENT_TYPE: &'static str = "registry";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            RegistryEventKind::Registered => EventSeverity::Debug,
            RegistryEventKind::Unregistered => EventSeverity::Debug,
            RegistryEventKind::RegistrationConflict => EventSeverity::Warning,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum RegistryEventKind {
    Registered,
    Unregistered,
    /// `register` was called for a name already taken; the existing entry
    /// was kept.
    RegistrationConflict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitoring_config_default_matches_documented_values() {
        let config = MonitoringConfig::default();
        assert!(config.enabled);
        assert_eq!(config.max_history_size, 1000);
        assert_eq!(config.severity_filter, EventSeverity::Info);
        assert_eq!(config.snapshot_interval_secs, 60);
    }

    #[test]
    fn supervision_event_severity_follows_its_kind() {
        let event = SupervisionEvent {
            timestamp: Utc::now(),
            supervisor_id: Uuid::new_v4(),
            child_id: Some("worker".into()),
            event_kind: SupervisionEventKind::RestartLimitExceeded {
                max_restarts: 3,
                max_seconds: 5.0,
            },
            metadata: HashMap::new(),
        };
        assert_eq!(event.severity(), EventSeverity::Critical);
    }

    #[test]
    fn registry_event_conflict_is_a_warning() {
        let event = RegistryEvent {
            timestamp: Utc::now(),
            name: "alice".into(),
            event_kind: RegistryEventKind::RegistrationConflict,
            metadata: HashMap::new(),
        };
        assert_eq!(event.severity(), EventSeverity::Warning);
    }
}
