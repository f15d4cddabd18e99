//! Worker Pool — naming workers through the registry and casting round-robin
//!
//! Spawns a handful of worker `GenServer`s, registers each under a name, and
//! dispatches work by looking names up through `registry::whereis` rather
//! than holding onto raw `Pid`s. Run with: cargo run --example worker_pool

use std::time::Duration;

use aegis_rt::prelude::*;
use async_trait::async_trait;

#[derive(Debug, Clone)]
struct DoWork(u32);

struct Worker {
    name: String,
    processed: u32,
}

#[async_trait]
impl GenServer for Worker {
    type Request = DoWork;
    type Reply = u32;

    async fn handle_call(
        &mut self,
        _request: Self::Request,
        _reference: &Ref,
        _ctx: &mut GenServerContext,
    ) -> Result<(Self::Reply, ActorFlow), GenServerError> {
        Err(GenServerError::custom("workers are cast-only"))
    }

    async fn handle_cast(
        &mut self,
        request: Self::Request,
        _ctx: &mut GenServerContext,
    ) -> Result<ActorFlow, GenServerError> {
        self.processed += 1;
        println!("   {} processed job {} (total {})", self.name, request.0, self.processed);
        Ok(ActorFlow::Continue)
    }
}

#[tokio::main]
async fn main() {
    println!("=== Worker Pool ===\n");

    let mut group = TaskGroup::new();
    let names = ["worker-a", "worker-b", "worker-c"];

    println!("1. Spawning and registering {} workers...", names.len());
    for name in names {
        let pid = spawn(
            GenServerDriver::new(Worker {
                name: name.to_string(),
                processed: 0,
            }),
            &mut group,
        )
        .await;
        let registered = registry::register(name, pid);
        assert!(registered, "name should be free on first registration");
    }

    println!("\n2. Dispatching 9 jobs round-robin by name...");
    for job in 0..9u32 {
        let target = names[(job as usize) % names.len()];
        let pid = registry::whereis(target).expect("worker still registered");
        cast(&pid, DoWork(job));
    }

    tokio::time::sleep(Duration::from_millis(50)).await;

    println!("\n3. Registered names: {:?}", registry::registered());

    println!("\n=== Example Complete ===");
}
