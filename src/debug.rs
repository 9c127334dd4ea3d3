use parking_lot::Mutex;
/// Debug logging for duopane
///
/// Everything logged through the `log` facade (and the category macros
/// below) is written to /tmp/duopane_debug.log on Unix/macOS,
/// or %TEMP%\duopane_debug.log on Windows.
/// Output is mirrored to stderr only when RUST_LOG is set, so the
/// interactive shell's stdout stays clean.
///
/// Level precedence: `--log-level` CLI flag, then RUST_LOG, then the
/// `log_level` config option.
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// File name of the debug log inside the temp directory
pub const LOG_FILE_NAME: &str = "duopane_debug.log";

/// Full path of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp").join(LOG_FILE_NAME);
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    path
}

struct DebugLogger {
    level: log::LevelFilter,
    file: Option<std::fs::File>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn new(level: log::LevelFilter, mirror_stderr: bool) -> Self {
        let file = if level != log::LevelFilter::Off {
            match OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
            {
                Ok(f) => Some(f),
                // Silently fail; the shell still works without a log file
                Err(_) => None,
            }
        } else {
            None
        };

        let mut logger = DebugLogger {
            level,
            file,
            mirror_stderr,
        };
        logger.write_raw(&format!(
            "\n{}\nduopane debug session started at {} (level={})\n{}\n",
            "=".repeat(80),
            get_timestamp(),
            level,
            "=".repeat(80)
        ));
        logger
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn write_record(&mut self, level: log::Level, target: &str, msg: &str) {
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            level,
            target,
            msg
        );
        self.write_raw(&line);
        if self.mirror_stderr {
            let _ = std::io::stderr().write_all(line.as_bytes());
        }
    }
}

/// `log::Log` implementation backed by the debug file
struct LogBridge {
    inner: Mutex<DebugLogger>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.inner.lock().level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = record.args().to_string();
        self.inner
            .lock()
            .write_record(record.level(), record.target(), &msg);
    }

    fn flush(&self) {
        if let Some(ref mut file) = self.inner.lock().file {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Pick the effective level: CLI flag, then RUST_LOG, then config
pub fn resolve_level(
    cli_level: Option<log::LevelFilter>,
    config_level: log::LevelFilter,
) -> log::LevelFilter {
    if let Some(level) = cli_level {
        return level;
    }
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.trim().parse::<log::LevelFilter>().ok())
        .unwrap_or(config_level)
}

/// Install the debug-file logger as the global `log` backend.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>, config_level: log::LevelFilter) {
    let level = resolve_level(cli_level, config_level);
    let mirror_stderr = std::env::var_os("RUST_LOG").is_some();
    let bridge = BRIDGE.get_or_init(|| LogBridge {
        inner: Mutex::new(DebugLogger::new(level, mirror_stderr)),
    });
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level);
    }
}

// Category macros; the category becomes the log target
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        log::trace!(target: $category, $($arg)*)
    };
}
