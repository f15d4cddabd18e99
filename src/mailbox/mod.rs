//! Mailboxes: an ordered buffer, a wake signal, and selective receive.
//!
//! The sender/receiver split and the error-enum shape are grounded on the
//! teacher's `mailbox::traits` module. The selective-receive scan loop itself
//! is novel — the teacher's mailboxes are plain FIFO wrappers around
//! `tokio::mpsc` with no ability to skip a message and come back to it later.
//!
//! A mailbox holds [`crate::term::Term`] values exclusively; this is a
//! deliberate simplification over a literal per-actor generic parameter
//! (documented in `DESIGN.md`): every actor in this crate, including
//! `GenServer`s dispatching their own strongly-typed requests, funnels
//! through the one selective-receive implementation here rather than
//! maintaining two parallel mailbox designs.

pub mod error;

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;

pub use error::MailboxError;

use crate::pattern::{extract_bindings, matches, Pattern};
use crate::term::Term;

type BoxFuture<R> = Pin<Box<dyn Future<Output = R> + Send>>;

struct Inner {
    buffer: Mutex<VecDeque<Term>>,
    notify: Notify,
    closed: AtomicBool,
    receiving: AtomicBool,
}

/// The sending half of a mailbox. Cheaply `Clone`-able; many senders may
/// address one mailbox.
#[derive(Clone)]
pub struct MailboxSender {
    inner: Arc<Inner>,
}

/// The receiving half of a mailbox. Not `Clone`: a mailbox has exactly one
/// logical consumer.
pub struct MailboxReceiver {
    inner: Arc<Inner>,
}

/// Create a fresh, empty mailbox and split it into its sender/receiver
/// halves.
pub fn channel() -> (MailboxSender, MailboxReceiver) {
    let inner = Arc::new(Inner {
        buffer: Mutex::new(VecDeque::new()),
        notify: Notify::new(),
        closed: AtomicBool::new(false),
        receiving: AtomicBool::new(false),
    });
    (
        MailboxSender {
            inner: Arc::clone(&inner),
        },
        MailboxReceiver { inner },
    )
}

impl MailboxSender {
    /// Enqueue `term` at the tail and wake one waiter, if any.
    ///
    /// Never fails. If the receiving half has already been dropped, the term
    /// is silently discarded.
    pub fn send(&self, term: Term) {
        if self.inner.closed.load(Ordering::Acquire) {
            return;
        }
        self.inner.buffer.lock().push_back(term);
        self.inner.notify.notify_one();
    }

    /// `true` if the receiving half has been dropped.
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Number of buffered, not-yet-matched messages.
    pub fn len(&self) -> usize {
        self.inner.buffer.lock().len()
    }
}

/// A single match arm passed to [`MailboxReceiver::receive`]: a test over a
/// buffered term, paired with a handler that consumes its bindings.
pub struct Selector<R> {
    test: Box<dyn Fn(&Term) -> bool + Send>,
    handle: Box<dyn FnOnce(Term) -> BoxFuture<R> + Send>,
}

impl<R: Send + 'static> Selector<R> {
    /// Build a selector from a [`Pattern`] and a handler over its extracted
    /// bindings.
    pub fn pattern<F, Fut>(pattern: Pattern, handler: F) -> Self
    where
        F: FnOnce(Vec<Term>) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let pattern = Arc::new(pattern);
        let test_pattern = Arc::clone(&pattern);
        Selector {
            test: Box::new(move |term| matches(term, &test_pattern)),
            handle: Box::new(move |term| {
                let bindings = extract_bindings(term, &pattern);
                Box::pin(handler(bindings))
            }),
        }
    }
}

struct ReceivingGuard<'a>(&'a AtomicBool);

impl Drop for ReceivingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl MailboxReceiver {
    /// Scan the buffer for the first message matched by any selector (tried
    /// in order), remove it, and run its handler. Suspends until a match
    /// arrives or `timeout` elapses.
    ///
    /// Concurrent calls on one mailbox are undefined behavior; debug builds
    /// assert against it.
    pub async fn receive<R: Send + 'static>(
        &mut self,
        mut selectors: Vec<Selector<R>>,
        timeout: Option<Duration>,
    ) -> Result<R, MailboxError> {
        debug_assert!(
            !selectors.is_empty(),
            "receive requires at least one selector"
        );
        debug_assert!(
            !self.inner.receiving.swap(true, Ordering::AcqRel),
            "concurrent receive on one mailbox is undefined behavior"
        );
        let _guard = ReceivingGuard(&self.inner.receiving);

        let deadline = timeout.map(|d| tokio::time::Instant::now() + d);
        loop {
            let notified = self.inner.notify.notified();

            let hit = {
                let mut buf = self.inner.buffer.lock();
                let mut found = None;
                'outer: for idx in 0..buf.len() {
                    for (sel_idx, selector) in selectors.iter().enumerate() {
                        if (selector.test)(&buf[idx]) {
                            found = Some((idx, sel_idx));
                            break 'outer;
                        }
                    }
                }
                found.and_then(|(idx, sel_idx)| buf.remove(idx).map(|term| (term, sel_idx)))
            };

            if let Some((term, sel_idx)) = hit {
                let selector = selectors.remove(sel_idx);
                return Ok((selector.handle)(term).await);
            }

            match deadline {
                Some(dl) => {
                    if tokio::time::timeout_at(dl, notified).await.is_err() {
                        return Err(MailboxError::ReceiveTimeout);
                    }
                }
                None => notified.await,
            }
        }
    }

    /// Number of buffered, not-yet-matched messages.
    pub fn len(&self) -> usize {
        self.inner.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for MailboxReceiver {
    fn drop(&mut self) {
        self.inner.closed.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn receive_returns_immediately_on_buffered_match() {
        let (tx, mut rx) = channel();
        tx.send(Term::value(5u32));
        let value = rx
            .receive(
                vec![Selector::pattern(Pattern::of::<u32>(), |bindings| async move {
                    bindings[0].downcast_ref::<u32>().copied().unwrap_or(0)
                })],
                None,
            )
            .await
            .expect("match");
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn receive_skips_unmatched_messages_preserving_order() {
        let (tx, mut rx) = channel();
        tx.send(Term::value(1u32));
        tx.send(Term::value("hello".to_string()));
        tx.send(Term::value(2u32));

        let value = rx
            .receive(
                vec![Selector::pattern(Pattern::of::<String>(), |bindings| async move {
                    bindings[0].downcast_ref::<String>().cloned().unwrap_or_default()
                })],
                None,
            )
            .await
            .expect("match");
        assert_eq!(value, "hello");
        assert_eq!(rx.len(), 2);

        let first = rx
            .receive(
                vec![Selector::pattern(Pattern::any(), |bindings| async move {
                    bindings[0].downcast_ref::<u32>().copied()
                })],
                None,
            )
            .await
            .expect("match");
        assert_eq!(first, Some(1));
    }

    #[tokio::test]
    async fn receive_times_out_when_nothing_matches() {
        let (_tx, mut rx) = channel();
        let result: Result<(), _> = rx
            .receive(
                vec![Selector::pattern(Pattern::any(), |_| async {})],
                Some(Duration::from_millis(20)),
            )
            .await;
        assert!(matches!(result, Err(MailboxError::ReceiveTimeout)));
    }

    #[tokio::test]
    async fn send_after_receiver_dropped_is_a_silent_no_op() {
        let (tx, rx) = channel();
        drop(rx);
        tx.send(Term::value(1u32));
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn receive_wakes_on_a_later_send() {
        let (tx, mut rx) = channel();
        let waiter = tokio::spawn(async move {
            rx.receive(
                vec![Selector::pattern(Pattern::of::<u32>(), |b| async move {
                    b[0].downcast_ref::<u32>().copied()
                })],
                Some(Duration::from_secs(1)),
            )
            .await
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.send(Term::value(99u32));
        let result = waiter.await.expect("task").expect("match");
        assert_eq!(result, Some(99));
    }
}
