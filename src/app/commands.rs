//! External commands into the application service.
//!
//! Today the only producer is the reset button; routing button input
//! through the same command surface keeps the door open for a serial or
//! RPC console to trigger identical behavior.

/// Commands the service accepts from outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Clear all accumulators and alarms, restart the monitoring window.
    Reset,
}
