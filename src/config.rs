//! Runtime configuration with sensible defaults.
//!
//! Grounded on the teacher's `system::config::SystemConfig` builder pattern,
//! narrowed to the knobs this spec actually names: the default `call`
//! timeout, a mailbox pre-allocation hint, and the supervisor's restart
//! rate-limit defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::messaging::DEFAULT_CALL_TIMEOUT;

/// Default capacity hint used when pre-allocating a mailbox's backing buffer.
pub const DEFAULT_MAILBOX_CAPACITY_HINT: usize = 16;

/// Default restart budget: at most 3 restarts in any trailing 5-second window.
pub const DEFAULT_MAX_RESTARTS: u32 = 3;
pub const DEFAULT_MAX_SECONDS: f64 = 5.0;

/// Top-level runtime defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Default timeout applied to `call` when none is given explicitly.
    pub default_call_timeout: Duration,

    /// Hint used to pre-size a freshly created mailbox's buffer.
    pub mailbox_capacity_hint: usize,

    /// Defaults handed to every [`crate::supervisor::Supervisor`] unless the
    /// caller overrides them.
    pub supervisor: SupervisorConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            default_call_timeout: DEFAULT_CALL_TIMEOUT,
            mailbox_capacity_hint: DEFAULT_MAILBOX_CAPACITY_HINT,
            supervisor: SupervisorConfig::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::default()
    }

    /// `Err` if a value is structurally nonsensical (zero timeout, zero
    /// restart window).
    pub fn validate(&self) -> Result<(), String> {
        if self.default_call_timeout.is_zero() {
            return Err("default_call_timeout must be > 0".to_string());
        }
        self.supervisor.validate()
    }
}

/// Restart-rate-limit defaults for a [`crate::supervisor::Supervisor`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SupervisorConfig {
    /// Maximum restarts allowed within `max_seconds` before the supervisor
    /// fails itself with `SupervisorError::MaxRestartsExceeded`.
    pub max_restarts: u32,
    /// Width, in seconds, of the sliding restart-history window.
    pub max_seconds: f64,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            max_restarts: DEFAULT_MAX_RESTARTS,
            max_seconds: DEFAULT_MAX_SECONDS,
        }
    }
}

impl SupervisorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_seconds <= 0.0 {
            return Err("max_seconds must be > 0".to_string());
        }
        Ok(())
    }
}

/// Fluent builder for [`RuntimeConfig`].
#[derive(Debug, Default)]
pub struct RuntimeConfigBuilder {
    config: RuntimeConfig,
}

impl RuntimeConfigBuilder {
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.config.default_call_timeout = timeout;
        self
    }

    pub fn with_mailbox_capacity_hint(mut self, hint: usize) -> Self {
        self.config.mailbox_capacity_hint = hint;
        self
    }

    pub fn with_max_restarts(mut self, max_restarts: u32) -> Self {
        self.config.supervisor.max_restarts = max_restarts;
        self
    }

    pub fn with_max_seconds(mut self, max_seconds: f64) -> Self {
        self.config.supervisor.max_seconds = max_seconds;
        self
    }

    pub fn build(self) -> Result<RuntimeConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = RuntimeConfig::default();
        assert_eq!(config.default_call_timeout, Duration::from_secs(5));
        assert_eq!(config.supervisor.max_restarts, 3);
        assert_eq!(config.supervisor.max_seconds, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides_apply() {
        let config = RuntimeConfig::builder()
            .with_call_timeout(Duration::from_secs(1))
            .with_max_restarts(10)
            .with_max_seconds(30.0)
            .build()
            .unwrap();
        assert_eq!(config.default_call_timeout, Duration::from_secs(1));
        assert_eq!(config.supervisor.max_restarts, 10);
        assert_eq!(config.supervisor.max_seconds, 30.0);
    }

    #[test]
    fn zero_call_timeout_fails_validation() {
        let result = RuntimeConfig::builder()
            .with_call_timeout(Duration::from_secs(0))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_max_seconds_fails_validation() {
        let result = RuntimeConfig::builder().with_max_seconds(0.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let config = RuntimeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: RuntimeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.supervisor.max_restarts, config.supervisor.max_restarts);
    }
}
