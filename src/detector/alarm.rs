//! Alarm latch and output arbitration.
//!
//! The two alarms are latched: once raised they stay up until a manual
//! reset.  Rather than two independent booleans, the latch is a tagged enum
//! so the clearing rule (reset clears everything at once) and the legal
//! combinations are visible in the type.

/// Latched alarm state.  Only a manual reset returns this to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlarmLatch {
    /// No alarm.
    #[default]
    Normal,
    /// A monitoring window closed without a qualifying pause.
    Leak,
    /// Flow was continuously active for longer than the abnormal threshold.
    Abnormal,
    /// Both alarms are latched.
    Both,
}

impl AlarmLatch {
    pub fn leak(self) -> bool {
        matches!(self, Self::Leak | Self::Both)
    }

    pub fn abnormal(self) -> bool {
        matches!(self, Self::Abnormal | Self::Both)
    }

    /// Latch the leak alarm, preserving an already-latched abnormal alarm.
    pub fn latch_leak(&mut self) {
        *self = match self {
            Self::Normal | Self::Leak => Self::Leak,
            Self::Abnormal | Self::Both => Self::Both,
        };
    }

    /// Latch the abnormal-activity alarm, preserving a latched leak alarm.
    pub fn latch_abnormal(&mut self) {
        *self = match self {
            Self::Normal | Self::Abnormal => Self::Abnormal,
            Self::Leak | Self::Both => Self::Both,
        };
    }
}

/// What the alarm indicator should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmSignal {
    Off,
    /// Leak: steady on.
    Steady,
    /// Abnormal activity: follow the blink phase.
    Blinking,
}

/// Arbitrate the latched alarms into one indicator signal.
/// Priority: abnormal (blinking) over leak (steady) over off.
pub fn arbitrate(latch: AlarmLatch) -> AlarmSignal {
    if latch.abnormal() {
        AlarmSignal::Blinking
    } else if latch.leak() {
        AlarmSignal::Steady
    } else {
        AlarmSignal::Off
    }
}

impl AlarmSignal {
    /// Resolve the signal to an LED level given the current blink phase.
    pub fn level(self, blink_phase: bool) -> bool {
        match self {
            Self::Off => false,
            Self::Steady => true,
            Self::Blinking => blink_phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latching_is_cumulative() {
        let mut latch = AlarmLatch::Normal;
        latch.latch_leak();
        assert_eq!(latch, AlarmLatch::Leak);
        latch.latch_abnormal();
        assert_eq!(latch, AlarmLatch::Both);
        // Latching again is idempotent.
        latch.latch_leak();
        latch.latch_abnormal();
        assert_eq!(latch, AlarmLatch::Both);
    }

    #[test]
    fn abnormal_outranks_leak() {
        assert_eq!(arbitrate(AlarmLatch::Normal), AlarmSignal::Off);
        assert_eq!(arbitrate(AlarmLatch::Leak), AlarmSignal::Steady);
        assert_eq!(arbitrate(AlarmLatch::Abnormal), AlarmSignal::Blinking);
        assert_eq!(arbitrate(AlarmLatch::Both), AlarmSignal::Blinking);
    }

    #[test]
    fn blinking_follows_phase() {
        assert!(AlarmSignal::Blinking.level(true));
        assert!(!AlarmSignal::Blinking.level(false));
        assert!(AlarmSignal::Steady.level(false));
        assert!(!AlarmSignal::Off.level(true));
    }
}
