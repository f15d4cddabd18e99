//! Restart-rate limiting.
//!
//! Grounded directly on the teacher's `supervisor::backoff::RestartBackoff`:
//! a sliding-window deque of restart timestamps. This crate's version drops
//! the teacher's exponential-delay fields (`base_delay`/`max_delay`) since
//! the spec calls only for an outright failure past the window, not a
//! progressively longer pause between attempts.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use super::error::SupervisorError;

/// Tracks restarts within a sliding `max_seconds` window and fails once more
/// than `max_restarts` have occurred inside it.
pub struct RestartBackoff {
    max_restarts: u32,
    max_seconds: f64,
    history: VecDeque<DateTime<Utc>>,
}

impl RestartBackoff {
    pub fn new(max_restarts: u32, max_seconds: f64) -> Self {
        Self {
            max_restarts,
            max_seconds,
            history: VecDeque::new(),
        }
    }

    /// Record one restart event and check the window.
    pub fn record_restart(&mut self) -> Result<(), SupervisorError> {
        let now = Utc::now();
        self.history.push_back(now);
        let window = chrono::Duration::milliseconds((self.max_seconds * 1000.0) as i64);
        let cutoff = now - window;
        while let Some(oldest) = self.history.front() {
            if *oldest < cutoff {
                self.history.pop_front();
            } else {
                break;
            }
        }
        if self.history.len() as u32 > self.max_restarts {
            return Err(SupervisorError::MaxRestartsExceeded {
                max_restarts: self.max_restarts,
                max_seconds: self.max_seconds,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_restarts_up_to_the_limit() {
        let mut backoff = RestartBackoff::new(2, 60.0);
        assert!(backoff.record_restart().is_ok());
        assert!(backoff.record_restart().is_ok());
        assert!(backoff.record_restart().is_err());
    }
}
