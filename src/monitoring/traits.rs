//! Core monitoring traits: a typed, async observation interface any runtime
//! component can publish structured events through.

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::MonitoringError;
use super::types::MonitoringSnapshot;

/// Event severity, ordered low to high for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EventSeverity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// Anything that can be fed to a [`Monitor`]: self-describing, timestamped,
/// and cheap to clone since it may be buffered in a ring history.
pub trait MonitoringEvent: Send + Sync + Clone + Debug + Serialize + 'static {
    /// Static event type identifier for categorization.
    const EVENT_TYPE: &'static str;

    fn timestamp(&self) -> DateTime<Utc>;

    fn severity(&self) -> EventSeverity;
}

/// Universal observation interface for one event type `E`. Implementations
/// range from [`super::InMemoryMonitor`] (ring-buffer history + counters) to
/// [`super::NoopMonitor`] (compiles away entirely).
#[async_trait]
pub trait Monitor<E: MonitoringEvent>: Send + Sync + Clone {
    async fn record(&self, event: E) -> Result<(), MonitoringError>;

    async fn snapshot(&self) -> Result<MonitoringSnapshot<E>, MonitoringError>;

    async fn reset(&self) -> Result<(), MonitoringError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize)]
    struct TestEvent {
        timestamp: DateTime<Utc>,
        severity: EventSeverity,
    }

    impl MonitoringEvent for TestEvent {
        const EVENT_TYPE: &'static str = "test_event";

        fn timestamp(&self) -> DateTime<Utc> {
            self.timestamp
        }

        fn severity(&self) -> EventSeverity {
            self.severity
        }
    }

    #[test]
    fn severity_orders_low_to_high() {
        assert!(EventSeverity::Trace < EventSeverity::Debug);
        assert!(EventSeverity::Debug < EventSeverity::Info);
        assert!(EventSeverity::Info < EventSeverity::Warning);
        assert!(EventSeverity::Warning < EventSeverity::Error);
        assert!(EventSeverity::Error < EventSeverity::Critical);
    }

    #[test]
    fn event_exposes_its_own_timestamp_and_severity() {
        let now = Utc::now();
        let event = TestEvent {
            timestamp: now,
            severity: EventSeverity::Info,
        };
        assert_eq!(event.timestamp(), now);
        assert_eq!(event.severity(), EventSeverity::Info);
        assert_eq!(TestEvent::EVENT_TYPE, "test_event");
    }
}
