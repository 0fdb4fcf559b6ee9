//! Unified error types for the LeakWatch firmware.
//!
//! The detector itself has no recoverable-error taxonomy — leak and abnormal
//! activity are domain outcomes, not failures.  What can fail is the boot
//! path: peripheral initialisation and the configuration contract.  All
//! variants are `Copy` so they can be passed around without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration violates the threshold contract.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
