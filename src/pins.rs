//! GPIO pin assignments for the LeakWatch main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Indicator LEDs (discrete, series resistor, driven directly)
// ---------------------------------------------------------------------------

/// Pulse indicator — mirrors the meter pulse input (active HIGH).
pub const LED_PULSE_GPIO: i32 = 4;
/// Alarm indicator — steady for leak, blinking for abnormal activity.
pub const LED_ALARM_GPIO: i32 = 5;
/// Heartbeat indicator — on-module LED, sinks current (active LOW).
pub const LED_HEARTBEAT_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Inputs (active-low with internal pull-ups)
// ---------------------------------------------------------------------------

/// Water-meter reed/hall pulse output.  LOW = pulse present (flow).
pub const PULSE_GPIO: i32 = 7;

/// Momentary reset button.  LOW = pressed.  Level-triggered: the signal is
/// assumed clean at this boundary, no debouncing is applied.
pub const BUTTON_GPIO: i32 = 8;
