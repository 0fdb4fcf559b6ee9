//! System configuration parameters
//!
//! All duration thresholds for the LeakWatch detector.  The production
//! profile matches the deployed meter installation; the accelerated profile
//! is used on the bench and by the integration tests.  A profile is chosen
//! once at boot and never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Leak monitoring ---
    /// Rolling monitoring window over which a qualifying pause must occur
    /// (seconds).
    pub monitoring_period_secs: u32,
    /// Minimum continuous inactivity that counts as a qualifying pause
    /// (seconds).
    pub required_inactivity_secs: u32,

    // --- Abnormal activity ---
    /// Continuous flow-active duration that raises the abnormal alarm
    /// (seconds).
    pub abnormal_activity_secs: u32,
    /// Longest pulse gap that still counts as continuous flow (seconds).
    /// A gap at least this long zeroes the flow-active accumulator.
    pub minimal_activity_secs: u32,

    // --- Indicators ---
    /// Blink half-period for the heartbeat and the abnormal-alarm blink
    /// phase (milliseconds).
    pub blink_period_ms: u32,

    // --- Diagnostics ---
    /// Emit a human-readable status line every tick (serial console).
    pub status_line: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Leak monitoring: audit over 24 hours, require a 2 hour pause
            monitoring_period_secs: 24 * 60 * 60,
            required_inactivity_secs: 2 * 60 * 60,

            // Abnormal activity: 2 hours of flow, minimum flowrate 1 pulse
            // per minute (1 l/min on this meter)
            abnormal_activity_secs: 2 * 60 * 60,
            minimal_activity_secs: 60,

            blink_period_ms: 250,
            status_line: true,
        }
    }
}

impl SystemConfig {
    /// Accelerated profile for bench commissioning and integration tests:
    /// 30 s window, 15 s qualifying pause, 60 s abnormal, 5 s minimal.
    pub fn accelerated() -> Self {
        Self {
            monitoring_period_secs: 30,
            required_inactivity_secs: 15,
            abnormal_activity_secs: 60,
            minimal_activity_secs: 5,
            ..Self::default()
        }
    }

    /// One-shot boot-time validation of the threshold contract.  The running
    /// detector never re-checks these; an invalid profile is a build/review
    /// failure, not a runtime condition.
    pub fn validate(&self) -> Result<()> {
        if self.monitoring_period_secs == 0 {
            return Err(Error::Config("monitoring_period_secs must be non-zero"));
        }
        if self.required_inactivity_secs >= self.monitoring_period_secs {
            return Err(Error::Config(
                "required_inactivity_secs must be shorter than the monitoring period",
            ));
        }
        if self.minimal_activity_secs == 0 {
            return Err(Error::Config("minimal_activity_secs must be non-zero"));
        }
        if self.minimal_activity_secs >= self.monitoring_period_secs {
            return Err(Error::Config(
                "minimal_activity_secs must be shorter than the monitoring period",
            ));
        }
        if self.blink_period_ms == 0 {
            return Err(Error::Config("blink_period_ms must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = SystemConfig::default();
        assert!(c.validate().is_ok());
        assert!(c.required_inactivity_secs < c.monitoring_period_secs);
        assert!(c.minimal_activity_secs < c.monitoring_period_secs);
        assert!(c.blink_period_ms > 0);
    }

    #[test]
    fn accelerated_profile_matches_bench_values() {
        let c = SystemConfig::accelerated();
        assert!(c.validate().is_ok());
        assert_eq!(c.monitoring_period_secs, 30);
        assert_eq!(c.required_inactivity_secs, 15);
        assert_eq!(c.abnormal_activity_secs, 60);
        assert_eq!(c.minimal_activity_secs, 5);
    }

    #[test]
    fn serde_roundtrip() {
        let c = SystemConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: SystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.monitoring_period_secs, c2.monitoring_period_secs);
        assert_eq!(c.required_inactivity_secs, c2.required_inactivity_secs);
        assert_eq!(c.minimal_activity_secs, c2.minimal_activity_secs);
        assert_eq!(c.status_line, c2.status_line);
    }

    #[test]
    fn pause_longer_than_window_is_rejected() {
        let c = SystemConfig {
            required_inactivity_secs: 31,
            ..SystemConfig::accelerated()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn minimal_activity_longer_than_window_is_rejected() {
        let c = SystemConfig {
            minimal_activity_secs: 30,
            ..SystemConfig::accelerated()
        };
        assert!(c.validate().is_err());
    }
}
