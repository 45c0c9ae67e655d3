//! Logging setup and a named logger helper.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::utility::get_folder_path;

/// Log level constants (compatible with Python logging module)
pub const DEBUG: i32 = 10;
pub const INFO: i32 = 20;
pub const WARNING: i32 = 30;

/// Convert integer log level to tracing Level
pub fn level_from_int(level: i32) -> Level {
    match level {
        l if l <= DEBUG => Level::DEBUG,
        l if l <= INFO => Level::INFO,
        l if l <= WARNING => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSetting {
    pub level: i32,
    pub console: bool,
    pub file: bool,
    /// Emit JSON lines on the console instead of text
    pub json: bool,
}

impl Default for LogSetting {
    fn default() -> Self {
        Self {
            level: INFO,
            console: true,
            file: false,
            json: false,
        }
    }
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` directives are honored on top of the configured level. A
/// subscriber that is already installed is left in place.
pub fn init_logger(setting: &LogSetting) {
    let level = level_from_int(setting.level);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let console_layer = setting.console.then(|| {
        if setting.json {
            fmt::layer().json().with_target(true).boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_ansi(true)
                .boxed()
        }
    });

    let file_layer = if setting.file {
        open_log_file().map(|file| fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

fn open_log_file() -> Option<fs::File> {
    let log_path = get_log_file_path();
    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            None
        }
    }
}

/// Get the log file path for today
pub fn get_log_file_path() -> PathBuf {
    let log_folder = get_folder_path("log");
    let today = Local::now().format("%Y%m%d").to_string();
    log_folder.join(format!("eeg_{}.log", today))
}

/// Simple logger for writing log messages
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
}

impl Logger {
    /// Create a new logger with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Log a debug message
    pub fn debug(&self, msg: &str) {
        tracing::debug!(logger = %self.name, "{}", msg);
    }

    /// Log an info message
    pub fn info(&self, msg: &str) {
        tracing::info!(logger = %self.name, "{}", msg);
    }

    /// Log a warning message
    pub fn warn(&self, msg: &str) {
        tracing::warn!(logger = %self.name, "{}", msg);
    }
}
