//! Supervision benchmarks: child spawn overhead and restart-strategy fan-out.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::hint::black_box;
use std::time::Duration;

use aegis_rt::genserver::GenServerDriver;
use aegis_rt::mailbox::{MailboxReceiver, Selector};
use aegis_rt::pattern::Pattern;
use aegis_rt::{spawn, Actor, ActorFlow, ChildSpec, Pid, RestartPolicy, SupervisionStrategy, Supervisor, TaskGroup};
use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, Criterion};

/// A child that blocks on an unmatched selective receive until cancelled —
/// minimal work, just enough to occupy a mailbox loop.
struct Idle;

#[async_trait]
impl Actor for Idle {
    type Error = std::io::Error;

    async fn run(&mut self, _pid: &Pid, mailbox: &mut MailboxReceiver) -> Result<ActorFlow, Self::Error> {
        let _ = mailbox
            .receive(vec![Selector::pattern(Pattern::any(), |_| async {})], None)
            .await;
        Ok(ActorFlow::Continue)
    }
}

fn supervisor_single_child_spawn(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    c.bench_function("supervisor_single_child_spawn", |b| {
        b.to_async(&rt).iter(|| async {
            let spec = ChildSpec::new("worker", RestartPolicy::Permanent, || Idle);
            let supervisor = Supervisor::new(vec![spec], SupervisionStrategy::OneForOne, 3, 5.0);
            let mut group = TaskGroup::new();
            let pid = spawn(GenServerDriver::new(supervisor), &mut group).await;
            black_box(pid);
        });
    });
}

fn supervisor_strategy_fan_out(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let specs = || {
        vec![
            ChildSpec::new("child-1", RestartPolicy::Permanent, || Idle),
            ChildSpec::new("child-2", RestartPolicy::Permanent, || Idle),
            ChildSpec::new("child-3", RestartPolicy::Permanent, || Idle),
        ]
    };

    c.bench_function("supervisor_strategy_one_for_one", |b| {
        b.to_async(&rt).iter(|| async {
            let supervisor = Supervisor::new(specs(), SupervisionStrategy::OneForOne, 3, 5.0);
            let mut group = TaskGroup::new();
            let pid = spawn(GenServerDriver::new(supervisor), &mut group).await;
            black_box(pid);
        });
    });

    c.bench_function("supervisor_strategy_one_for_all", |b| {
        b.to_async(&rt).iter(|| async {
            let supervisor = Supervisor::new(specs(), SupervisionStrategy::OneForAll, 3, 5.0);
            let mut group = TaskGroup::new();
            let pid = spawn(GenServerDriver::new(supervisor), &mut group).await;
            black_box(pid);
        });
    });

    c.bench_function("supervisor_strategy_rest_for_one", |b| {
        b.to_async(&rt).iter(|| async {
            let supervisor = Supervisor::new(specs(), SupervisionStrategy::RestForOne, 3, 5.0);
            let mut group = TaskGroup::new();
            let pid = spawn(GenServerDriver::new(supervisor), &mut group).await;
            black_box(pid);
        });
    });
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .without_plots()
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = supervisor_single_child_spawn, supervisor_strategy_fan_out
}

criterion_main!(benches);
