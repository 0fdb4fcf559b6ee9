//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).  A future
//! telemetry adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Status(s) => {
                info!(
                    "TICK  | t={} | window={}s (extending: {}) | pause={}s (registered: {}) | \
                     flow={} (active {}s)",
                    s.tick,
                    s.window_elapsed_secs,
                    if s.window_extending { "yes" } else { "no" },
                    s.pause_secs,
                    if s.pause_registered { "yes" } else { "no" },
                    if s.flow_active { "yes" } else { "no" },
                    s.flow_active_secs,
                );
            }
            AppEvent::PauseRegistered { pause_secs } => {
                info!("PAUSE | qualifying pause registered after {}s", pause_secs);
            }
            AppEvent::WindowClosed { leak } => {
                info!("WINDOW| closed and restarted (leak: {})", leak);
            }
            AppEvent::LeakAlarmRaised => {
                warn!("ALARM | leak: no qualifying pause within the monitoring window");
            }
            AppEvent::AbnormalAlarmRaised { active_secs } => {
                warn!("ALARM | abnormal activity: flow active for {}s", active_secs);
            }
            AppEvent::ResetApplied => {
                info!("RESET | accumulators and alarms cleared");
            }
            AppEvent::Started => {
                info!("START | detector running");
            }
        }
    }
}
