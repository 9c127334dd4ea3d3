//! Configuration types and enums.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the editor pool hands out permits when it is at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AcquireMode {
    /// Replace the editor shown on the left pane and hand its permit to
    /// the new one. Fails with a resource-exhausted error only when there
    /// is no editor on the left to replace.
    #[default]
    NonBlocking,
    /// Suspend the caller until a permit is released.
    ///
    /// Only honoured off the main sequence. On the main sequence the open
    /// fails with a resource-exhausted error instead of waiting, and no
    /// editor is replaced.
    Blocking,
}

impl AcquireMode {
    /// Display name for status output
    pub fn display_name(&self) -> &'static str {
        match self {
            AcquireMode::NonBlocking => "non-blocking",
            AcquireMode::Blocking => "blocking",
        }
    }
}

/// Log level for the debug log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// All available levels, from quietest to most verbose
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl LogLevel {
    /// Lowercase name, as used in config files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LogLevel::all()
            .iter()
            .copied()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = LogLevel::all().iter().map(|l| l.as_str()).collect();
                format!("unknown log level '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering_matches_filter() {
        let filters: Vec<log::LevelFilter> =
            LogLevel::all().iter().map(|l| l.to_level_filter()).collect();
        let mut sorted = filters.clone();
        sorted.sort();
        assert_eq!(filters, sorted);
    }

    #[test]
    fn test_acquire_mode_serde_names() {
        let yaml = serde_yaml_ng::to_string(&AcquireMode::NonBlocking).unwrap();
        assert_eq!(yaml.trim(), "non_blocking");
        let mode: AcquireMode = serde_yaml_ng::from_str("blocking").unwrap();
        assert_eq!(mode, AcquireMode::Blocking);
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!(" WARN ".parse::<LogLevel>(), Ok(LogLevel::Warn));
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(err.contains("trace"));
    }
}
