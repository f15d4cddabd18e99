//! Getting Started — Your First GenServer
//!
//! Builds a counter server, drives it through `cast`/`call`, and shuts it
//! down. Run with: cargo run --example getting_started

use aegis_rt::prelude::*;
use async_trait::async_trait;

#[derive(Debug, Clone)]
enum CounterMessage {
    Increment,
    Decrement,
    GetValue,
}

struct CounterServer {
    value: i32,
}

#[async_trait]
impl GenServer for CounterServer {
    type Request = CounterMessage;
    type Reply = i32;

    async fn handle_call(
        &mut self,
        request: Self::Request,
        _reference: &Ref,
        _ctx: &mut GenServerContext,
    ) -> Result<(Self::Reply, ActorFlow), GenServerError> {
        match request {
            CounterMessage::GetValue => Ok((self.value, ActorFlow::Continue)),
            _ => Err(GenServerError::custom("call only answers GetValue")),
        }
    }

    async fn handle_cast(
        &mut self,
        request: Self::Request,
        _ctx: &mut GenServerContext,
    ) -> Result<ActorFlow, GenServerError> {
        match request {
            CounterMessage::Increment => {
                self.value += 1;
                println!("   incremented to {}", self.value);
            }
            CounterMessage::Decrement => {
                self.value -= 1;
                println!("   decremented to {}", self.value);
            }
            CounterMessage::GetValue => {}
        }
        Ok(ActorFlow::Continue)
    }
}

#[tokio::main]
async fn main() {
    println!("=== Getting Started ===\n");

    let mut group = TaskGroup::new();
    let pid = spawn(GenServerDriver::new(CounterServer { value: 0 }), &mut group).await;

    println!("1. Casting increments...");
    cast(&pid, CounterMessage::Increment);
    cast(&pid, CounterMessage::Increment);
    cast(&pid, CounterMessage::Decrement);

    println!("\n2. Calling for the current value...");
    let value: i32 = call_default(&pid, CounterMessage::GetValue)
        .await
        .expect("server answered");
    println!("   value = {value}");
    assert_eq!(value, 1);

    println!("\n=== Example Complete ===");
}
