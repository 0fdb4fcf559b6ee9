//! Leak / abnormal-flow detection core.
//!
//! Tick-driven accumulator pipeline over a single state record:
//!
//! ```text
//!            ┌──────────────────────────────────────────────┐
//!  pulse ──▶ │ track_activity → accumulate → minimal-timeout │
//!            │   → register_pause → expire_window            │
//!            │   → close_window(pulse) → evaluate_abnormal   │
//!            └──────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                        AlarmLatch (latched until reset)
//! ```
//!
//! The step order is load-bearing: `close_window` consumes the pulse value
//! sampled for this tick, and the expiry check must run before it so a
//! window that expires on the same tick a pulse arrives closes immediately.
//! Each step is a separate method so the ordering is structurally visible
//! rather than an accident of statement layout.

pub mod alarm;
pub mod state;
pub mod ticker;

use log::{info, warn};

use crate::config::SystemConfig;
use alarm::AlarmLatch;
use state::DetectorState;

/// What happened during one detector tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A monitoring window closed (and restarted) this tick.
    pub window_closed: bool,
    /// The leak alarm was newly raised this tick.
    pub leak_raised: bool,
    /// The abnormal-activity alarm was newly raised this tick.
    pub abnormal_raised: bool,
    /// A qualifying pause was registered for the first time this window.
    pub pause_registered: bool,
}

/// The detection engine: owns the state record and the fixed thresholds.
pub struct Detector {
    state: DetectorState,
    monitoring_period: u64,
    required_inactivity: u64,
    abnormal_activity: u64,
    minimal_activity: u64,
}

impl Detector {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: DetectorState::new(),
            monitoring_period: u64::from(config.monitoring_period_secs),
            required_inactivity: u64::from(config.required_inactivity_secs),
            abnormal_activity: u64::from(config.abnormal_activity_secs),
            minimal_activity: u64::from(config.minimal_activity_secs),
        }
    }

    /// Advance the detector by one tick (one elapsed second), given whether
    /// a pulse is present on this tick.
    pub fn tick(&mut self, pulse_present: bool) -> TickReport {
        self.state.now += 1;

        self.track_activity(pulse_present);
        self.accumulate();
        self.enforce_minimal_activity();
        let pause_registered = self.register_pause();
        self.expire_window();
        let (window_closed, leak_raised) = self.close_window(pulse_present);
        let abnormal_raised = self.evaluate_abnormal();

        TickReport {
            window_closed,
            leak_raised,
            abnormal_raised,
            pause_registered,
        }
    }

    /// Manual reset: clear all accumulators and alarms, restart the window
    /// at the current tick.  Takes effect immediately — a pulse on this same
    /// tick will re-establish flow from scratch.
    pub fn reset(&mut self) {
        self.state.reset();
        info!("detector reset: window restarted at t={}", self.state.now);
    }

    /// Read-only view of the state record.
    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    /// Current latched alarms.
    pub fn alarms(&self) -> AlarmLatch {
        self.state.alarms
    }

    // ── Pipeline steps, in execution order ───────────────────────

    /// A pulse marks flow active and cancels any pause in progress; silence
    /// starts (or continues) a pause.
    fn track_activity(&mut self, pulse_present: bool) {
        let s = &mut self.state;
        if pulse_present {
            s.last_activity_time = s.now;
            s.is_flow_active = true;
            s.is_pause_active = false;
            s.pause_time = 0;
        } else {
            s.is_pause_active = true;
        }
    }

    /// Advance whichever accumulator is live this tick.
    fn accumulate(&mut self) {
        let s = &mut self.state;
        if s.is_flow_active {
            s.flow_active_time += 1;
        }
        if s.is_pause_active {
            s.pause_time += 1;
        }
    }

    /// Below the minimum flowrate (no pulse for `minimal_activity` ticks)
    /// the flow no longer counts as active, and the abnormal-activity
    /// accumulator starts over.
    fn enforce_minimal_activity(&mut self) {
        let s = &mut self.state;
        if s.now - s.last_activity_time >= self.minimal_activity {
            s.is_flow_active = false;
            s.flow_active_time = 0;
        }
    }

    /// A pause long enough to qualify is registered; the flag is sticky
    /// until the window closes.  Returns true on the first registration.
    fn register_pause(&mut self) -> bool {
        let s = &mut self.state;
        if s.pause_time >= self.required_inactivity && !s.is_pause_registered {
            s.is_pause_registered = true;
            info!("qualifying pause registered ({}s of inactivity)", s.pause_time);
            return true;
        }
        false
    }

    /// Flag window expiry.  The window is *not* closed here: it extends
    /// until the next pulse, so a pause in progress may straddle the
    /// boundary without being cut short or double-counted.
    fn expire_window(&mut self) {
        let s = &mut self.state;
        if s.now - s.window_start >= self.monitoring_period {
            s.is_window_expired = true;
        }
    }

    /// Close and restart the window — only on a pulse while expired.  If no
    /// qualifying pause was registered during the (possibly extended)
    /// window, that is a leak.  A window with no pulses ever again simply
    /// never closes and never alarms; that is intended behavior.
    fn close_window(&mut self, pulse_present: bool) -> (bool, bool) {
        let s = &mut self.state;
        if !(s.is_window_expired && pulse_present) {
            return (false, false);
        }

        let leak = !s.is_pause_registered;
        if leak {
            s.alarms.latch_leak();
            warn!(
                "leak alarm: window [{}..{}] closed without a qualifying pause",
                s.window_start, s.now
            );
        } else {
            info!("window [{}..{}] closed clean", s.window_start, s.now);
        }

        s.is_pause_registered = false;
        s.is_window_expired = false;
        s.window_start = s.now;
        (true, leak)
    }

    /// Latch the abnormal-activity alarm once continuous flow crosses the
    /// threshold.  The comparison alone never clears it: `flow_active_time`
    /// may later drop to zero while the alarm stays up until reset.
    fn evaluate_abnormal(&mut self) -> bool {
        let s = &mut self.state;
        if s.flow_active_time >= self.abnormal_activity && !s.alarms.abnormal() {
            s.alarms.latch_abnormal();
            warn!(
                "abnormal activity alarm: flow active for {}s",
                s.flow_active_time
            );
            return true;
        }
        false
    }
}
