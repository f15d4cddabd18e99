//! The reserved wire shapes every process understands.
//!
//! The spec this crate implements models messages as free-form tagged
//! tuples (`("$cast", request)`, `("$call", ref, from, request)`, ...) —
//! sensible in a dynamically typed host, but in Rust a closed enum gives the
//! same reserved-tag guarantee at compile time instead of by convention:
//! impersonating the protocol from user code becomes a type error rather
//! than a runtime hazard. `T` is the sender's own request/info type; the
//! enum is otherwise non-generic over reply or command payloads, which are
//! always plain `Term`s or `Reason`s.

use crate::pid::Pid;
use crate::reason::Reason;
use crate::reference::Ref;

/// `("$cast", request)`, `("$call", ref, reply_to, request)`,
/// `("$reply", ref, value)`, and the internal supervisor command surface,
/// unified into one closed enum.
#[derive(Debug)]
pub enum Protocol<T> {
    /// Fire-and-forget request.
    Cast(T),
    /// Request/reply: a correlation [`Ref`], the address to reply to, and
    /// the request payload.
    Call(Ref, Pid, T),
    /// A reply to a prior `Call`, correlated by [`Ref`].
    Reply(Ref, T),
    /// A supervised child exited; carries its id, address, and reason.
    ChildDown(String, Pid, Reason),
    /// Ask a supervisor to stop one child without restarting it.
    TerminateChild(String),
    /// Ask a supervisor to restart one child out of band.
    RestartChild(String),
    /// Ask a supervisor for a snapshot of its children.
    WhichChildren,
    /// Ask a supervisor for the number of children it supervises.
    CountChildren,
    /// A background task spawned via `GenServerContext::start_background_task`
    /// completed successfully.
    TaskSuccess(Pid, T),
    /// A background task spawned via `GenServerContext::start_background_task`
    /// failed.
    TaskFailure(Pid, Reason),
}
