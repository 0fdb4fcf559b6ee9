//! Adapters: concrete implementations of the port traits plus the
//! platform clock.

pub mod hardware;
pub mod log_sink;
pub mod time;
