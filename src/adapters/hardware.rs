//! Hardware adapter — bridges real GPIO to the domain port traits.
//!
//! Owns the three indicator LED drivers and samples the two input levels,
//! exposing them through [`SignalPort`] and [`IndicatorPort`].  This is the
//! only module in the system that touches actual pins.  On non-espidf
//! targets the underlying hw_init layer uses cfg-gated simulation stubs.

use crate::app::ports::{IndicatorPort, SignalPort};
use crate::drivers::hw_init;
use crate::drivers::indicator::IndicatorLed;
use crate::pins;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    pulse_led: IndicatorLed,
    alarm_led: IndicatorLed,
    heartbeat_led: IndicatorLed,
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            pulse_led: IndicatorLed::new(pins::LED_PULSE_GPIO, false),
            alarm_led: IndicatorLed::new(pins::LED_ALARM_GPIO, false),
            // On-module LED sinks current: lit when the pin is low.
            heartbeat_led: IndicatorLed::new(pins::LED_HEARTBEAT_GPIO, true),
        }
    }
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

// ── SignalPort implementation ─────────────────────────────────

impl SignalPort for HardwareAdapter {
    fn pulse_present(&mut self) -> bool {
        // Active-low: the meter pulls the line down while flow is detected.
        !hw_init::gpio_read(pins::PULSE_GPIO)
    }

    fn reset_pressed(&mut self) -> bool {
        // Active-low momentary button.
        !hw_init::gpio_read(pins::BUTTON_GPIO)
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl IndicatorPort for HardwareAdapter {
    fn set_pulse_led(&mut self, on: bool) {
        self.pulse_led.set(on);
    }

    fn set_alarm_led(&mut self, on: bool) {
        self.alarm_led.set(on);
    }

    fn set_heartbeat_led(&mut self, on: bool) {
        self.heartbeat_led.set(on);
    }

    fn all_off(&mut self) {
        self.pulse_led.off();
        self.alarm_led.off();
        self.heartbeat_led.off();
    }
}
