//! The single mutable state record the detector pipeline runs over.
//!
//! `DetectorState` is the blackboard every pipeline step reads from and
//! writes to: the tick counter, the flow/pause accumulators, the monitoring
//! window, and the alarm latch.  It is owned exclusively by the
//! [`Detector`](super::Detector) — there are no ambient globals, and nothing
//! here survives a power cycle.

use super::alarm::AlarmLatch;

/// All detector accumulators, zeroed at boot and by [`reset`](Self::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorState {
    /// Monotonic tick index (seconds since boot).  Never decreases;
    /// increments by exactly one per detector tick.
    pub now: u64,

    // -- Flow activity --
    /// Whether flow is currently considered active.
    pub is_flow_active: bool,
    /// Continuous flow-active duration (ticks).  Zero whenever
    /// `is_flow_active` is false.
    pub flow_active_time: u64,
    /// Tick at which the last pulse was observed.
    pub last_activity_time: u64,

    // -- Pause tracking --
    /// Whether an inactivity interval is currently accumulating.
    pub is_pause_active: bool,
    /// Continuous inactivity duration (ticks).  Zeroed by any pulse.
    pub pause_time: u64,
    /// Set once `pause_time` reaches the qualifying threshold; sticky until
    /// the monitoring window closes.
    pub is_pause_registered: bool,

    // -- Monitoring window --
    /// Tick at which the current monitoring window opened.
    pub window_start: u64,
    /// The window has run its full period and is now extending, waiting for
    /// a pulse to close it.
    pub is_window_expired: bool,

    // -- Alarms --
    /// Latched alarm outputs, cleared only by reset.
    pub alarms: AlarmLatch,
}

impl DetectorState {
    pub fn new() -> Self {
        Self {
            now: 0,
            is_flow_active: false,
            flow_active_time: 0,
            last_activity_time: 0,
            is_pause_active: false,
            pause_time: 0,
            is_pause_registered: false,
            window_start: 0,
            is_window_expired: false,
            alarms: AlarmLatch::Normal,
        }
    }

    /// Manual reset: restart the monitoring window at the current tick and
    /// clear every accumulator and both alarms.
    ///
    /// `is_pause_registered` is left alone on purpose — the window restart
    /// means the next close evaluation starts clean anyway, and clearing it
    /// here would change nothing observable.
    pub fn reset(&mut self) {
        self.window_start = self.now;
        self.is_window_expired = false;
        self.pause_time = 0;
        self.is_flow_active = false;
        self.flow_active_time = 0;
        self.alarms = AlarmLatch::Normal;
    }
}

impl Default for DetectorState {
    fn default() -> Self {
        Self::new()
    }
}
