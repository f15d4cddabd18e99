//! Mailbox benchmarks: raw enqueue/dequeue cost and selective-receive scan
//! overhead, independent of any actor driver loop.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::hint::black_box;
use std::time::Duration;

use aegis_rt::mailbox::{channel, Selector};
use aegis_rt::pattern::Pattern;
use aegis_rt::term::Term;
use criterion::{criterion_group, criterion_main, Criterion};

/// Point-to-point send then immediate receive of a single already-buffered
/// message.
fn mailbox_send_receive(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    c.bench_function("mailbox_send_receive", |b| {
        b.to_async(&rt).iter(|| async {
            let (tx, mut rx) = channel();
            tx.send(Term::value(1u32));
            let value = rx
                .receive(
                    vec![Selector::pattern(Pattern::of::<u32>(), |bindings| async move {
                        bindings[0].downcast_ref::<u32>().copied()
                    })],
                    None,
                )
                .await
                .unwrap();
            black_box(value);
        });
    });
}

/// Sustained throughput: enqueue 100 messages, then drain all 100.
fn mailbox_throughput_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    c.bench_function("mailbox_throughput_100", |b| {
        b.to_async(&rt).iter(|| async {
            let (tx, mut rx) = channel();
            for i in 0..100u32 {
                tx.send(Term::value(i));
            }

            let mut count = 0;
            for _ in 0..100 {
                let hit = rx
                    .receive(vec![Selector::pattern(Pattern::of::<u32>(), |_| async {})], None)
                    .await;
                if hit.is_ok() {
                    count += 1;
                }
            }
            black_box(count);
        });
    });
}

/// Selective receive forced to scan past unmatched messages before finding
/// its match, exercising the scan loop rather than the fast head-of-queue
/// path exercised by `mailbox_send_receive`.
fn mailbox_selective_receive_scan(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    c.bench_function("mailbox_selective_receive_scan", |b| {
        b.to_async(&rt).iter(|| async {
            let (tx, mut rx) = channel();
            for i in 0..9u32 {
                tx.send(Term::value(i));
            }
            tx.send(Term::value("needle".to_string()));

            let value = rx
                .receive(
                    vec![Selector::pattern(Pattern::of::<String>(), |bindings| async move {
                        bindings[0].downcast_ref::<String>().cloned()
                    })],
                    None,
                )
                .await
                .unwrap();
            black_box(value);
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
    targets = mailbox_send_receive, mailbox_throughput_100, mailbox_selective_receive_scan
}

criterion_main!(benches);
