//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields.

use crate::types::{AcquireMode, LogLevel};

/// One live editor at a time; opening another file replaces it.
pub fn editor_capacity() -> usize {
    1
}

pub fn acquire_mode() -> AcquireMode {
    AcquireMode::NonBlocking
}

pub fn log_level() -> LogLevel {
    LogLevel::Info
}

pub fn bool_true() -> bool {
    true
}
