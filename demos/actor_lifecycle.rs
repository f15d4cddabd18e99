//! Actor Lifecycle — spawning, message driven state, and `on_exit`
//!
//! A raw `Actor` (not a `GenServer`) that runs a short `Continue` loop and
//! then stops itself, observed through an `on_exit` callback. Run with:
//! cargo run --example actor_lifecycle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use aegis_rt::prelude::*;
use async_trait::async_trait;

#[derive(Debug, Clone)]
struct Ping;

struct Greeter {
    greetings_left: u32,
}

#[async_trait]
impl Actor for Greeter {
    type Error = std::io::Error;

    async fn run(&mut self, _pid: &Pid, mailbox: &mut MailboxReceiver) -> Result<ActorFlow, Self::Error> {
        mailbox
            .receive(
                vec![Selector::pattern(Pattern::of::<Ping>(), |_| async {})],
                Some(Duration::from_secs(1)),
            )
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;

        self.greetings_left -= 1;
        println!("   hello! ({} left)", self.greetings_left);

        if self.greetings_left == 0 {
            Ok(ActorFlow::Stop)
        } else {
            Ok(ActorFlow::Continue)
        }
    }
}

#[tokio::main]
async fn main() {
    println!("=== Actor Lifecycle ===\n");

    let exited = Arc::new(AtomicBool::new(false));
    let on_exit_flag = Arc::clone(&exited);
    let on_exit: OnExit = Arc::new(move |pid, reason| {
        println!("   {pid:?} exited with {reason:?}");
        on_exit_flag.store(true, Ordering::SeqCst);
    });

    let mut group = TaskGroup::new();
    let handle = spawn_link(Greeter { greetings_left: 3 }, &mut group, Some(on_exit)).await;

    println!("1. Sending three pings...");
    for _ in 0..3 {
        send(handle.pid(), Ping);
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    println!("\n2. Actor exited cleanly: {}", exited.load(Ordering::SeqCst));

    println!("\n=== Example Complete ===");
}
