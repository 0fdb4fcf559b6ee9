//! Hardware-adjacent drivers: GPIO init, indicator LEDs, blink timing.

pub mod blinker;
pub mod hw_init;
pub mod indicator;
