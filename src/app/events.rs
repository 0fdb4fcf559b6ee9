//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them — today that is the serial log.

use crate::detector::alarm::AlarmLatch;
use crate::detector::state::DetectorState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The application service has started.
    Started,

    /// Per-tick status snapshot (the optional diagnostic status line).
    Status(StatusSnapshot),

    /// A qualifying pause was registered for the current window.
    PauseRegistered { pause_secs: u64 },

    /// A monitoring window closed and restarted.
    WindowClosed { leak: bool },

    /// The leak alarm was raised.
    LeakAlarmRaised,

    /// The abnormal-activity alarm was raised.
    AbnormalAlarmRaised { active_secs: u64 },

    /// A manual reset cleared all accumulators and alarms.
    ResetApplied,
}

/// A point-in-time view of the detector accumulators, suitable for the
/// per-tick status line.
#[derive(Debug, Clone, Copy)]
pub struct StatusSnapshot {
    /// Current tick (seconds since boot).
    pub tick: u64,
    /// Seconds elapsed in the current monitoring window.
    pub window_elapsed_secs: u64,
    /// The window has expired and is extending.
    pub window_extending: bool,
    /// Accumulated continuous inactivity (seconds).
    pub pause_secs: u64,
    /// A qualifying pause has been registered this window.
    pub pause_registered: bool,
    /// Flow is currently considered active.
    pub flow_active: bool,
    /// Continuous flow-active duration (seconds).
    pub flow_active_secs: u64,
    /// Latched alarms.
    pub alarms: AlarmLatch,
}

impl StatusSnapshot {
    pub fn from_state(s: &DetectorState) -> Self {
        Self {
            tick: s.now,
            window_elapsed_secs: s.now - s.window_start,
            window_extending: s.is_window_expired,
            pause_secs: s.pause_time,
            pause_registered: s.is_pause_registered,
            flow_active: s.is_flow_active,
            flow_active_secs: s.flow_active_time,
            alarms: s.alarms,
        }
    }
}
