//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the detector, the second ticker, and the blink-phase
//! timer.  One [`poll`](AppService::poll) call is one control pass; all I/O
//! flows through port traits injected at the call site, making the whole
//! service testable with mock adapters.
//!
//! ```text
//!  SignalPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │        AppService           │
//! IndicatorPort ◀─│  Ticker · Detector · Blink  │
//!                 └────────────────────────────┘
//! ```
//!
//! The per-pass ordering is load-bearing and mirrors the detector contract:
//! sample inputs → mirror pulse → reset → detector tick (which consumes the
//! pulse sampled above) → alarm arbitration → heartbeat update.

use log::info;

use crate::config::SystemConfig;
use crate::detector::alarm::{self, AlarmLatch};
use crate::detector::state::DetectorState;
use crate::detector::ticker::SecondTicker;
use crate::detector::{Detector, TickReport};
use crate::drivers::blinker::Blinker;

use super::commands::AppCommand;
use super::events::{AppEvent, StatusSnapshot};
use super::ports::{EventSink, IndicatorPort, SignalPort};

/// The application service orchestrates all domain logic.
pub struct AppService {
    detector: Detector,
    ticker: SecondTicker,
    blinker: Blinker,
    status_line: bool,
}

impl AppService {
    /// Construct the service.  `now_ms` anchors the tick and blink timers.
    pub fn new(config: &SystemConfig, now_ms: u64) -> Self {
        Self {
            detector: Detector::new(config),
            ticker: SecondTicker::new(now_ms),
            blinker: Blinker::new(config.blink_period_ms, now_ms),
            status_line: config.status_line,
        }
    }

    /// Announce startup.  Indicators start dark; the first poll drives them.
    pub fn start(&mut self, io: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        io.all_off();
        sink.emit(&AppEvent::Started);
        info!("AppService started");
    }

    /// Run one control pass.  Call as often as possible from the main loop;
    /// the detector advances only when a full second has elapsed, while the
    /// pulse mirror, reset sampling, alarm output, and heartbeat run every
    /// pass.
    pub fn poll(
        &mut self,
        now_ms: u64,
        io: &mut (impl SignalPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        // 1. Sample inputs.  The detector tick below consumes this same
        //    pulse value, so a window close always sees the pulse that
        //    triggered it.
        let pulse = io.pulse_present();
        io.set_pulse_led(pulse);

        // 2. Reset is level-triggered and applies before the tick: a pulse
        //    on the same pass re-establishes flow from the cleared state.
        if io.reset_pressed() {
            self.apply_reset(io, sink);
        }

        // 3. Detector tick, once per elapsed second.
        if self.ticker.poll(now_ms).is_some() {
            let report = self.detector.tick(pulse);
            self.emit_tick_events(report, sink);
        }

        // 4. Alarm arbitration uses the blink phase as it stood when the
        //    alarms were evaluated; the heartbeat toggle comes last.
        let signal = alarm::arbitrate(self.detector.alarms());
        io.set_alarm_led(signal.level(self.blinker.phase()));
        let heartbeat = self.blinker.poll(now_ms);
        io.set_heartbeat_led(heartbeat);
    }

    /// Process an external command (button today, console later).
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        io: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::Reset => self.apply_reset(io, sink),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current latched alarms.
    pub fn alarms(&self) -> AlarmLatch {
        self.detector.alarms()
    }

    /// Read-only view of the detector state record.
    pub fn detector_state(&self) -> &DetectorState {
        self.detector.state()
    }

    /// Ticks (seconds) counted since boot.
    pub fn tick_count(&self) -> u64 {
        self.ticker.seconds()
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_reset(&mut self, io: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        self.detector.reset();
        // Force the alarm output dark immediately rather than waiting for
        // the next arbitration pass.
        io.set_alarm_led(false);
        sink.emit(&AppEvent::ResetApplied);
    }

    fn emit_tick_events(&self, report: TickReport, sink: &mut impl EventSink) {
        if report.pause_registered {
            sink.emit(&AppEvent::PauseRegistered {
                pause_secs: self.detector.state().pause_time,
            });
        }
        if report.window_closed {
            sink.emit(&AppEvent::WindowClosed {
                leak: report.leak_raised,
            });
        }
        if report.leak_raised {
            sink.emit(&AppEvent::LeakAlarmRaised);
        }
        if report.abnormal_raised {
            sink.emit(&AppEvent::AbnormalAlarmRaised {
                active_secs: self.detector.state().flow_active_time,
            });
        }
        if self.status_line {
            sink.emit(&AppEvent::Status(StatusSnapshot::from_state(
                self.detector.state(),
            )));
        }
    }
}
