//! One-second tick derivation from the monotonic millisecond clock.
//!
//! The ticker fires once per ≥1000 ms elapsed since the *previous* fire.
//! It does not compensate for a slow driving loop: if the loop stalls,
//! ticks stretch and the drift accumulates.  Wrapping subtraction makes
//! clock wraparound a non-event rather than a special case.

const TICK_PERIOD_MS: u64 = 1000;

/// Derives a monotonically increasing second counter from `uptime_ms`.
#[derive(Debug, Clone, Copy)]
pub struct SecondTicker {
    last_tick_ms: u64,
    seconds: u64,
}

impl SecondTicker {
    /// `now_ms` anchors the first tick one period from this call.
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_tick_ms: now_ms,
            seconds: 0,
        }
    }

    /// Poll from the main loop.  Returns the new second count when a tick
    /// fires, `None` otherwise.  Fires at most once per call.
    pub fn poll(&mut self, now_ms: u64) -> Option<u64> {
        if now_ms.wrapping_sub(self.last_tick_ms) >= TICK_PERIOD_MS {
            self.last_tick_ms = now_ms;
            self.seconds += 1;
            Some(self.seconds)
        } else {
            None
        }
    }

    /// Seconds counted since boot.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }
}
