//! LeakWatch Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single cooperative polling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter        LogEventSink       Esp32Clock    │
//! │  (Signal+Indicator)     (EventSink)        (monotonic)   │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌──────────────────────────────────────────────────┐    │
//! │  │            AppService (pure logic)               │    │
//! │  │  SecondTicker · Detector · Blinker               │    │
//! │  └──────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use leakwatch::adapters::hardware::HardwareAdapter;
use leakwatch::adapters::log_sink::LogEventSink;
use leakwatch::adapters::time::Esp32Clock;
use leakwatch::app::service::AppService;
use leakwatch::config::SystemConfig;
use leakwatch::drivers::hw_init;

/// Loop pacing.  Well under the 250 ms blink period so the phase stays
/// visually steady, and far faster than the one-second tick cadence.
const POLL_INTERVAL_MS: u64 = 10;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Starting LeakWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    // Fixed at build time; swap in `SystemConfig::accelerated()` for bench
    // commissioning.
    let config = SystemConfig::default();
    config.validate()?;
    info!(
        "Profile: window={}s, pause>={}s, abnormal>={}s, minimal-activity={}s",
        config.monitoring_period_secs,
        config.required_inactivity_secs,
        config.abnormal_activity_secs,
        config.minimal_activity_secs,
    );

    // ── 3. Hardware ───────────────────────────────────────────
    hw_init::init_peripherals()?;
    let clock = Esp32Clock::new();
    let mut hw = HardwareAdapter::new();
    let mut sink = LogEventSink::new();

    // ── 4. Application service ────────────────────────────────
    let mut app = AppService::new(&config, clock.uptime_ms());
    app.start(&mut hw, &mut sink);

    info!("System ready. Entering polling loop.");

    // ── 5. Polling loop ───────────────────────────────────────
    loop {
        app.poll(clock.uptime_ms(), &mut hw, &mut sink);
        std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));
    }
}
