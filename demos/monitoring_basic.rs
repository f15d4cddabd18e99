//! Monitoring Basics — recording and snapshotting actor lifecycle events
//!
//! Uses an `InMemoryMonitor<ActorEvent>` directly (outside of any actor) to
//! show the record/snapshot/reset cycle. Run with:
//! cargo run --example monitoring_basic

use std::collections::HashMap;

use aegis_rt::prelude::*;
use chrono::Utc;
use uuid::Uuid;

fn actor_event(kind: ActorEventKind) -> ActorEvent {
    ActorEvent {
        timestamp: Utc::now(),
        actor_id: Uuid::new_v4(),
        event_kind: kind,
        metadata: HashMap::new(),
    }
}

#[tokio::main]
async fn main() {
    println!("=== Monitoring Basics ===\n");

    let monitor: InMemoryMonitor<ActorEvent> = InMemoryMonitor::new(MonitoringConfig::default());

    println!("1. Recording a spawn and a failure...");
    monitor.record(actor_event(ActorEventKind::Spawned)).await.expect("record spawned");
    monitor
        .record(actor_event(ActorEventKind::ErrorOccurred {
            reason: "simulated failure".to_string(),
        }))
        .await
        .expect("record error");

    let snapshot = monitor.snapshot().await.expect("snapshot");
    println!("2. Snapshot: {} events, {} errors", snapshot.total_events, snapshot.error_count);
    assert_eq!(snapshot.total_events, 2);
    assert_eq!(snapshot.error_count, 1);

    println!("\n3. Resetting...");
    monitor.reset().await.expect("reset");
    let after_reset = monitor.snapshot().await.expect("snapshot");
    assert_eq!(after_reset.total_events, 0);

    println!("\n=== Example Complete ===");
}
