//! In-memory monitor: lock-free atomic counters plus a bounded ring-buffer
//! history, grounded on the teacher's `monitoring::in_memory::InMemoryMonitor`.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use super::error::MonitoringError;
use super::traits::{EventSeverity, Monitor, MonitoringEvent};
use super::types::{MonitoringConfig, MonitoringSnapshot};

/// An `Arc`-backed monitor: cheap to clone, shared counters and history
/// underneath.
#[derive(Debug)]
pub struct InMemoryMonitor<E: MonitoringEvent> {
    inner: Arc<Inner<E>>,
}

#[derive(Debug)]
struct Inner<E: MonitoringEvent> {
    config: MonitoringConfig,
    total_events: AtomicU64,
    trace_count: AtomicU64,
    debug_count: AtomicU64,
    info_count: AtomicU64,
    warning_count: AtomicU64,
    error_count: AtomicU64,
    critical_count: AtomicU64,
    history: RwLock<VecDeque<E>>,
}

impl<E: MonitoringEvent> InMemoryMonitor<E> {
    pub fn new(config: MonitoringConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                total_events: AtomicU64::new(0),
                trace_count: AtomicU64::new(0),
                debug_count: AtomicU64::new(0),
                info_count: AtomicU64::new(0),
                warning_count: AtomicU64::new(0),
                error_count: AtomicU64::new(0),
                critical_count: AtomicU64::new(0),
                history: RwLock::new(VecDeque::new()),
            }),
        }
    }

    fn bump(&self, severity: EventSeverity) {
        let counter = match severity {
            EventSeverity::Trace => &self.inner.trace_count,
            EventSeverity::Debug => &self.inner.debug_count,
            EventSeverity::Info => &self.inner.info_count,
            EventSeverity::Warning => &self.inner.warning_count,
            EventSeverity::Error => &self.inner.error_count,
            EventSeverity::Critical => &self.inner.critical_count,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl<E: MonitoringEvent> Clone for InMemoryMonitor<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl<E: MonitoringEvent> Monitor<E> for InMemoryMonitor<E> {
    async fn record(&self, event: E) -> Result<(), MonitoringError> {
        if !self.inner.config.enabled {
            return Ok(());
        }
        let severity = event.severity();
        if severity < self.inner.config.severity_filter {
            return Ok(());
        }

        self.inner.total_events.fetch_add(1, Ordering::Relaxed);
        self.bump(severity);

        let mut history = self
            .inner
            .history
            .write()
            .map_err(|e| MonitoringError::record(format!("history lock poisoned: {e}")))?;
        if history.len() >= self.inner.config.max_history_size {
            history.pop_front();
        }
        history.push_back(event);
        Ok(())
    }

    async fn snapshot(&self) -> Result<MonitoringSnapshot<E>, MonitoringError> {
        let history = self
            .inner
            .history
            .read()
            .map_err(|e| MonitoringError::snapshot(format!("history lock poisoned: {e}")))?;
        Ok(MonitoringSnapshot {
            timestamp: Utc::now(),
            total_events: self.inner.total_events.load(Ordering::Relaxed),
            trace_count: self.inner.trace_count.load(Ordering::Relaxed),
            debug_count: self.inner.debug_count.load(Ordering::Relaxed),
            info_count: self.inner.info_count.load(Ordering::Relaxed),
            warning_count: self.inner.warning_count.load(Ordering::Relaxed),
            error_count: self.inner.error_count.load(Ordering::Relaxed),
            critical_count: self.inner.critical_count.load(Ordering::Relaxed),
            recent_events: history.iter().cloned().collect(),
        })
    }

    async fn reset(&self) -> Result<(), MonitoringError> {
        self.inner.total_events.store(0, Ordering::Relaxed);
        self.inner.trace_count.store(0, Ordering::Relaxed);
        self.inner.debug_count.store(0, Ordering::Relaxed);
        self.inner.info_count.store(0, Ordering::Relaxed);
        self.inner.warning_count.store(0, Ordering::Relaxed);
        self.inner.error_count.store(0, Ordering::Relaxed);
        self.inner.critical_count.store(0, Ordering::Relaxed);
        let mut history = self
            .inner
            .history
            .write()
            .map_err(|e| MonitoringError::reset(format!("history lock poisoned: {e}")))?;
        history.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::monitoring::types::{ActorEvent, ActorEventKind};
    use uuid::Uuid;

    fn event(kind: ActorEventKind) -> ActorEvent {
        ActorEvent {
            timestamp: Utc::now(),
            actor_id: Uuid::new_v4(),
            event_kind: kind,
            metadata: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn fresh_monitor_has_an_empty_snapshot() {
        let monitor = InMemoryMonitor::<ActorEvent>::new(MonitoringConfig::default());
        let snapshot = monitor.snapshot().await.unwrap();
        assert_eq!(snapshot.total_events, 0);
        assert!(snapshot.recent_events.is_empty());
    }

    #[tokio::test]
    async fn recording_increments_counters_and_history() {
        let monitor = InMemoryMonitor::new(MonitoringConfig::default());
        monitor.record(event(ActorEventKind::Started)).await.unwrap();
        monitor.record(event(ActorEventKind::Stopped { normal: true })).await.unwrap();

        let snapshot = monitor.snapshot().await.unwrap();
        assert_eq!(snapshot.total_events, 2);
        assert_eq!(snapshot.info_count, 2);
        assert_eq!(snapshot.recent_events.len(), 2);
    }

    #[tokio::test]
    async fn history_is_bounded_by_max_history_size() {
        let mut config = MonitoringConfig::default();
        config.max_history_size = 2;
        let monitor = InMemoryMonitor::new(config);
        for _ in 0..5 {
            monitor.record(event(ActorEventKind::Started)).await.unwrap();
        }
        let snapshot = monitor.snapshot().await.unwrap();
        assert_eq!(snapshot.total_events, 5);
        assert_eq!(snapshot.recent_events.len(), 2);
    }

    #[tokio::test]
    async fn events_below_the_severity_filter_are_dropped() {
        let mut config = MonitoringConfig::default();
        config.severity_filter = EventSeverity::Error;
        let monitor = InMemoryMonitor::new(config);
        monitor.record(event(ActorEventKind::Started)).await.unwrap();
        let snapshot = monitor.snapshot().await.unwrap();
        assert_eq!(snapshot.total_events, 0);
    }

    #[tokio::test]
    async fn reset_clears_counters_and_history() {
        let monitor = InMemoryMonitor::new(MonitoringConfig::default());
        monitor.record(event(ActorEventKind::Started)).await.unwrap();
        monitor.reset().await.unwrap();
        let snapshot = monitor.snapshot().await.unwrap();
        assert_eq!(snapshot.total_events, 0);
        assert!(snapshot.recent_events.is_empty());
    }
}
