//! Port traits — the hexagonal boundary between the detector core and the
//! outside world.
//!
//! ```text
//!   SignalPort ──▶ AppService (domain) ──▶ IndicatorPort / EventSink
//! ```
//!
//! Adapters (GPIO hardware, log sinks, test mocks) implement these traits.
//! The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Signal port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the input signals, sampled as levels.
///
/// Both signals are presence booleans — the pulse is sampled, not
/// edge-counted, and both are assumed electrically clean at this boundary.
pub trait SignalPort {
    /// True while the meter pulse output indicates flow.
    fn pulse_present(&mut self) -> bool;

    /// True while the reset button is held (level-triggered).
    fn reset_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the three indicator outputs.
pub trait IndicatorPort {
    /// Mirror of the pulse input, updated every loop iteration.
    fn set_pulse_led(&mut self, on: bool);

    /// Alarm indicator: steady for leak, blinking for abnormal activity.
    fn set_alarm_led(&mut self, on: bool);

    /// Heartbeat indicator, toggling on a fixed period regardless of
    /// alarm state.
    fn set_heartbeat_led(&mut self, on: bool);

    /// All indicators off.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log today; telemetry later).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
