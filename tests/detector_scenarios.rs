//! Integration tests: AppService → detector → indicators, on the
//! accelerated bench profile (30 s window, 15 s pause, 60 s abnormal,
//! 5 s minimal activity) with mock ports and a simulated clock.

use leakwatch::app::commands::AppCommand;
use leakwatch::app::events::AppEvent;
use leakwatch::app::ports::{EventSink, IndicatorPort, SignalPort};
use leakwatch::app::service::AppService;
use leakwatch::config::SystemConfig;
use leakwatch::detector::alarm::AlarmLatch;

// ── Mock implementations ──────────────────────────────────────

#[derive(Default)]
struct MockBoard {
    pulse: bool,
    reset: bool,
    pulse_led: bool,
    alarm_led: bool,
    heartbeat_led: bool,
}

impl SignalPort for MockBoard {
    fn pulse_present(&mut self) -> bool {
        self.pulse
    }
    fn reset_pressed(&mut self) -> bool {
        self.reset
    }
}

impl IndicatorPort for MockBoard {
    fn set_pulse_led(&mut self, on: bool) {
        self.pulse_led = on;
    }
    fn set_alarm_led(&mut self, on: bool) {
        self.alarm_led = on;
    }
    fn set_heartbeat_led(&mut self, on: bool) {
        self.heartbeat_led = on;
    }
    fn all_off(&mut self) {
        self.pulse_led = false;
        self.alarm_led = false;
        self.heartbeat_led = false;
    }
}

#[derive(Default)]
struct VecSink {
    events: Vec<AppEvent>,
}

impl EventSink for VecSink {
    fn emit(&mut self, e: &AppEvent) {
        self.events.push(e.clone());
    }
}

impl VecSink {
    fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

// ── Test harness ──────────────────────────────────────────────

struct Harness {
    app: AppService,
    board: MockBoard,
    sink: VecSink,
    now_ms: u64,
}

impl Harness {
    fn new() -> Self {
        let config = SystemConfig::accelerated();
        let mut app = AppService::new(&config, 0);
        let mut board = MockBoard::default();
        let mut sink = VecSink::default();
        app.start(&mut board, &mut sink);
        Self {
            app,
            board,
            sink,
            now_ms: 0,
        }
    }

    /// Advance one simulated second with the given pulse level.
    fn tick(&mut self, pulse: bool) {
        self.board.pulse = pulse;
        self.now_ms += 1000;
        self.app
            .poll(self.now_ms, &mut self.board, &mut self.sink);
    }

    fn run(&mut self, pulse: bool, n: u64) {
        for _ in 0..n {
            self.tick(pulse);
        }
    }

    /// A sub-second poll (no detector tick), advancing `delta_ms`.
    fn poll_ms(&mut self, delta_ms: u64) {
        self.now_ms += delta_ms;
        self.app
            .poll(self.now_ms, &mut self.board, &mut self.sink);
    }
}

// ── Scenario 1: pause straddling the window boundary ──────────

#[test]
fn silence_then_pulse_closes_window_without_leak() {
    let mut h = Harness::new();
    h.run(false, 30);
    assert!(h.app.detector_state().is_window_expired);
    assert!(h.app.detector_state().is_pause_registered);

    // The window extends through tick 31; its first pulse closes it clean.
    h.tick(true);
    assert_eq!(h.app.alarms(), AlarmLatch::Normal);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::WindowClosed { leak: false })), 1);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::LeakAlarmRaised)), 0);
    assert_eq!(h.app.detector_state().window_start, 31);
}

// ── Scenario 2: continuous flow → leak alarm, steady indicator ─

#[test]
fn continuous_flow_raises_leak_with_steady_indicator() {
    let mut h = Harness::new();
    h.run(true, 30);
    assert!(h.app.alarms().leak());
    assert!(!h.app.alarms().abnormal());
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::WindowClosed { leak: true })), 1);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::LeakAlarmRaised)), 1);

    // Steady-on regardless of blink phase.
    for _ in 0..8 {
        h.poll_ms(250);
        assert!(h.board.alarm_led);
    }
}

// ── Scenario 3: abnormal activity → blinking indicator ────────

#[test]
fn sixty_seconds_of_flow_raises_abnormal_alarm() {
    let mut h = Harness::new();
    h.run(true, 60);
    assert!(h.app.alarms().abnormal());
    assert_eq!(h.app.detector_state().flow_active_time, 60);
    assert_eq!(
        h.sink
            .count(|e| matches!(e, AppEvent::AbnormalAlarmRaised { active_secs: 60 })),
        1
    );
}

#[test]
fn abnormal_alarm_indicator_blinks_at_the_heartbeat_cadence() {
    let mut h = Harness::new();
    h.run(true, 60);
    assert!(h.app.alarms().abnormal());

    // Each 250 ms poll toggles the blink phase, and the alarm indicator
    // follows it: alternating on/off from here on.
    let mut levels = Vec::new();
    for _ in 0..6 {
        h.poll_ms(250);
        levels.push(h.board.alarm_led);
    }
    for pair in levels.windows(2) {
        assert_ne!(pair[0], pair[1], "alarm indicator must alternate: {levels:?}");
    }
}

// ── Scenario 4: intermittent flow below the minimal gap ───────

#[test]
fn intermittent_flow_still_accumulates_to_abnormal() {
    let mut h = Harness::new();
    // Pulse every 3rd tick: gaps of 2 s never reach the 5 s minimal-
    // activity timeout, so the accumulator runs through them.
    for t in 1..=60u64 {
        h.tick(t % 3 == 1);
    }
    assert!(h.app.alarms().abnormal());
}

// ── Scenario 5: minimal-activity timeout resets the accumulator ─

#[test]
fn five_second_gap_clears_flow_state() {
    let mut h = Harness::new();
    h.tick(true);
    assert!(h.app.detector_state().is_flow_active);

    h.run(false, 4);
    assert!(h.app.detector_state().is_flow_active);

    h.tick(false); // gap reaches 5 ticks
    assert!(!h.app.detector_state().is_flow_active);
    assert_eq!(h.app.detector_state().flow_active_time, 0);
}

// ── Scenario 6: manual reset ──────────────────────────────────

#[test]
fn reset_clears_all_accumulators_and_alarms() {
    let mut h = Harness::new();
    h.run(true, 45); // leak latched at tick 30, flow accumulating
    assert!(h.app.alarms().leak());
    assert!(h.board.alarm_led);

    h.board.reset = true;
    h.tick(true);
    h.board.reset = false;

    let s = h.app.detector_state();
    assert_eq!(h.app.alarms(), AlarmLatch::Normal);
    assert_eq!(s.pause_time, 0);
    assert!(!s.is_window_expired);
    assert_eq!(s.window_start, 45);
    assert!(!h.board.alarm_led);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::ResetApplied)), 1);

    // The pulse sampled on the reset pass still re-established flow.
    assert!(s.is_flow_active);
    assert_eq!(s.flow_active_time, 1);
}

#[test]
fn reset_command_behaves_like_the_button() {
    let mut h = Harness::new();
    h.run(true, 60);
    assert!(h.app.alarms().abnormal());

    let Harness {
        app, board, sink, ..
    } = &mut h;
    app.handle_command(AppCommand::Reset, board, sink);
    assert_eq!(app.alarms(), AlarmLatch::Normal);
    assert_eq!(app.detector_state().flow_active_time, 0);
    assert!(!board.alarm_led);
}

// ── Cross-cutting behavior ────────────────────────────────────

#[test]
fn pulse_led_mirrors_input_every_iteration() {
    let mut h = Harness::new();
    h.board.pulse = true;
    h.poll_ms(10); // sub-tick poll
    assert!(h.board.pulse_led);
    h.board.pulse = false;
    h.poll_ms(10);
    assert!(!h.board.pulse_led);
}

#[test]
fn heartbeat_toggles_regardless_of_alarm_state() {
    let mut h = Harness::new();
    let mut toggles = 0;
    let mut last = h.board.heartbeat_led;
    for _ in 0..8 {
        h.poll_ms(250);
        if h.board.heartbeat_led != last {
            toggles += 1;
            last = h.board.heartbeat_led;
        }
    }
    assert_eq!(toggles, 8);

    // Still toggling with both alarms latched.
    h.run(true, 60);
    assert!(h.app.alarms().abnormal() && h.app.alarms().leak());
    let mut toggles = 0;
    let mut last = h.board.heartbeat_led;
    for _ in 0..8 {
        h.poll_ms(250);
        if h.board.heartbeat_led != last {
            toggles += 1;
            last = h.board.heartbeat_led;
        }
    }
    assert_eq!(toggles, 8);
}

#[test]
fn status_line_is_emitted_once_per_tick() {
    let mut h = Harness::new();
    h.run(false, 10);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::Status(_))), 10);
    // Sub-second polls add no status lines.
    h.poll_ms(10);
    h.poll_ms(10);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::Status(_))), 10);
}

#[test]
fn status_line_can_be_disabled() {
    let config = SystemConfig {
        status_line: false,
        ..SystemConfig::accelerated()
    };
    let mut app = AppService::new(&config, 0);
    let mut board = MockBoard::default();
    let mut sink = VecSink::default();
    app.start(&mut board, &mut sink);
    for i in 1..=10u64 {
        app.poll(i * 1000, &mut board, &mut sink);
    }
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Status(_))), 0);
}

#[test]
fn pause_registration_event_fires_once_per_window() {
    let mut h = Harness::new();
    h.run(false, 25);
    assert_eq!(
        h.sink
            .count(|e| matches!(e, AppEvent::PauseRegistered { pause_secs: 15 })),
        1
    );
}
