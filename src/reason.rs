//! Exit reasons.
//!
//! Every actor exit — clean or not — carries a [`Reason`]. Supervisors and
//! `on_exit` callbacks inspect it to decide whether a restart is warranted.

use std::fmt;

/// Why a process stopped.
///
/// `Display` on the `Error` variant always contains the substring `"error"`;
/// this is a load-bearing contract for [`crate::supervisor::RestartPolicy::Transient`],
/// which restarts iff the reason is abnormal.
#[derive(Debug, Clone)]
pub enum Reason {
    /// Clean stop: `ActorFlow::Stop` was returned, or the owning scope was cancelled.
    Normal,
    /// Abnormal stop: a handler returned `Err`. A panic inside a handler is
    /// not represented here — it unwinds the owning task instead of
    /// producing a `Reason` (see `actor::driver`'s module doc).
    Error(String),
}

impl Reason {
    /// Build an abnormal reason from any displayable error.
    pub fn from_error(err: impl fmt::Display) -> Self {
        Reason::Error(err.to_string())
    }

    /// `true` for [`Reason::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Reason::Error(_))
    }

    /// `true` for [`Reason::Normal`].
    pub fn is_normal(&self) -> bool {
        matches!(self, Reason::Normal)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Normal => write!(f, "normal"),
            Reason::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_error_substring() {
        let reason = Reason::from_error("boom");
        assert!(reason.to_string().contains("error"));
        assert!(reason.is_error());
        assert!(!reason.is_normal());
    }

    #[test]
    fn normal_is_not_error() {
        assert!(Reason::Normal.is_normal());
        assert!(!Reason::Normal.is_error());
    }
}
