//! Supervisor Basics — OneForOne restart after a child panics
//!
//! A worker that fails on its first message, supervised with a `Permanent`
//! restart policy under `OneForOne`. Run with:
//! cargo run --example supervisor_basic

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use aegis_rt::prelude::*;
use async_trait::async_trait;

struct FlakyWorker {
    has_failed_once: Arc<AtomicBool>,
}

#[async_trait]
impl Actor for FlakyWorker {
    type Error = std::io::Error;

    async fn run(&mut self, _pid: &Pid, mailbox: &mut MailboxReceiver) -> Result<ActorFlow, Self::Error> {
        if self.has_failed_once.swap(true, Ordering::SeqCst) {
            println!("   worker running normally");
            let _ = mailbox
                .receive(vec![Selector::pattern(Pattern::any(), |_| async {})], None)
                .await;
            return Ok(ActorFlow::Continue);
        }
        println!("   worker failing on purpose");
        Err(std::io::Error::other("simulated crash"))
    }
}

#[tokio::main]
async fn main() {
    println!("=== Supervisor Basics ===\n");

    let has_failed_once = Arc::new(AtomicBool::new(false));
    let factory_flag = Arc::clone(&has_failed_once);
    let spec = ChildSpec::new("flaky-worker", RestartPolicy::Permanent, move || FlakyWorker {
        has_failed_once: Arc::clone(&factory_flag),
    });

    let supervisor = Supervisor::with_config(vec![spec], SupervisionStrategy::OneForOne, SupervisorConfig::default());

    let mut group = TaskGroup::new();
    let pid = spawn(GenServerDriver::new(supervisor), &mut group).await;

    println!("1. Waiting for the crash-and-restart cycle...");
    tokio::time::sleep(Duration::from_millis(100)).await;

    let reply: SupervisorReply = call_default(&pid, SupervisorCommand::WhichChildren)
        .await
        .expect("supervisor answers");
    match reply {
        SupervisorReply::Children(children) => {
            println!("2. Children after restart: {children:?}");
            assert_eq!(children.len(), 1);
        }
        other => println!("unexpected reply: {other:?}"),
    }

    println!("\n=== Example Complete ===");
}
