//! Free functions for talking to a process by [`Pid`].
//!
//! Wire-shape conventions grounded on the teacher's `message::*` module;
//! adapted to deliver through [`Protocol`] rather than a tag string.

use std::time::Duration;

use crate::config::RuntimeConfig;
use crate::error::RuntimeError;
use crate::mailbox::{channel, Selector};
use crate::pattern::Pattern;
use crate::pid::Pid;
use crate::protocol::Protocol;
use crate::reference::Ref;
use crate::term::{Message, Term};

/// Default `call` timeout, matching § 6's external-interface default.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Enqueue `message` into `pid`'s mailbox.
///
/// Never fails: if the mailbox's receiving half is already gone, the
/// message is silently discarded.
pub fn send<T: Message>(pid: &Pid, message: T) {
    pid.deliver(Term::value(message));
}

/// Fire-and-forget request: `send(pid, Protocol::Cast(request))`.
pub fn cast<T: Message>(pid: &Pid, request: T) {
    send(pid, Protocol::Cast(request));
}

/// Request/reply. Allocates an ephemeral mailbox, mints a fresh [`Ref`],
/// sends `Protocol::Call(r#ref, reply_to, request)`, and waits up to
/// `timeout` for the correlated `Protocol::Reply`.
///
/// The ephemeral mailbox is reclaimed as soon as this function returns —
/// Rust's ownership model drops it automatically, satisfying "reclaimable
/// immediately on return or timeout" without an explicit cleanup step. A
/// reply that arrives after the deadline finds the receiving half already
/// gone and is silently dropped by `send`'s usual close-handling.
pub async fn call<Req, Rep>(pid: &Pid, request: Req, timeout: Duration) -> Result<Rep, RuntimeError>
where
    Req: Message,
    Rep: Message,
{
    let (reply_tx, mut reply_rx) = channel();
    let reply_to = Pid::new(reply_tx);
    let correlation = Ref::new();

    send(pid, Protocol::Call(correlation, reply_to, request));

    let reply = reply_rx
        .receive(
            vec![Selector::pattern(
                Pattern::of::<Protocol<Rep>>(),
                |bindings| async move { bindings.into_iter().next().and_then(|t| t.downcast::<Protocol<Rep>>()) },
            )],
            Some(timeout),
        )
        .await
        .map_err(|_| RuntimeError::ReceiveTimeout)?;

    match reply {
        Some(Protocol::Reply(r#ref, value)) if r#ref == correlation => Ok(value),
        _ => Err(RuntimeError::UnexpectedReply),
    }
}

/// `call` with the § 6 default timeout.
pub async fn call_default<Req, Rep>(pid: &Pid, request: Req) -> Result<Rep, RuntimeError>
where
    Req: Message,
    Rep: Message,
{
    call(pid, request, DEFAULT_CALL_TIMEOUT).await
}

/// `call` with `config`'s configured timeout rather than either caller-chosen
/// value, for applications that thread one [`RuntimeConfig`] through their
/// whole process tree instead of hardcoding a timeout at every call site.
pub async fn call_with_config<Req, Rep>(pid: &Pid, request: Req, config: &RuntimeConfig) -> Result<Rep, RuntimeError>
where
    Req: Message,
    Rep: Message,
{
    call(pid, request, config.default_call_timeout).await
}
