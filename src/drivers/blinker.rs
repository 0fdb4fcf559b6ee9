//! Fixed-period blink-phase timer.
//!
//! Keyed off the monotonic millisecond clock at a finer resolution than the
//! one-second tick, so the heartbeat and the abnormal-alarm blink stay
//! steady even if the tick cadence stretches.  Wrapping subtraction keeps
//! clock wraparound transparent.

/// Square-wave phase generator: toggles every `period_ms`.
#[derive(Debug, Clone, Copy)]
pub struct Blinker {
    period_ms: u64,
    last_toggle_ms: u64,
    phase: bool,
}

impl Blinker {
    pub fn new(period_ms: u32, now_ms: u64) -> Self {
        Self {
            period_ms: u64::from(period_ms),
            last_toggle_ms: now_ms,
            phase: false,
        }
    }

    /// Poll from the main loop; toggles the phase when a period has
    /// elapsed.  Returns the phase after any toggle.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.wrapping_sub(self.last_toggle_ms) >= self.period_ms {
            self.last_toggle_ms = now_ms;
            self.phase = !self.phase;
        }
        self.phase
    }

    /// The current phase, without advancing the timer.
    pub fn phase(&self) -> bool {
        self.phase
    }
}
