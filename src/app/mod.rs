//! Application layer: port traits, outbound events, commands, and the
//! service that runs one control pass per loop iteration.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
