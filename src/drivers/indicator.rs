//! Single indicator LED driver.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives a GPIO level via hw_init.
//! On host/test: tracks state in-memory only.
//!
//! The `active_low` flag absorbs wiring polarity — the on-module heartbeat
//! LED sinks current, the discrete indicators source it — so callers always
//! think in terms of "lit".

use crate::drivers::hw_init;

pub struct IndicatorLed {
    gpio: i32,
    active_low: bool,
    lit: bool,
}

impl IndicatorLed {
    pub fn new(gpio: i32, active_low: bool) -> Self {
        Self {
            gpio,
            active_low,
            lit: false,
        }
    }

    /// Drive the LED; `on` is the logical state regardless of polarity.
    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on != self.active_low);
        self.lit = on;
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
