//! Monitor configuration: where the client writes its logs and how much
//! history to retain.
//!
//! Production code uses `MonitorConfig::default()`, which points at the
//! client's log directory under the home folder. Tests inject a temp
//! directory via `MonitorConfig::with_log_dir()`.

use std::path::{Path, PathBuf};

/// Directory under the home folder where the client writes its logs.
const LOG_DIR_SUFFIX: &str = "Library/Logs/Roblox";

/// Configuration for an [`ActivityMonitor`](crate::ActivityMonitor).
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Directory scanned for player log files. `None` when no home
    /// directory could be resolved; the locator then selects nothing.
    log_dir: Option<PathBuf>,
    /// Explicit log file override. When set, directory scanning never runs.
    log_file: Option<PathBuf>,
    /// Optional cap on archived sessions. `None` keeps history unbounded.
    history_limit: Option<usize>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_dir: dirs::home_dir().map(|home| home.join(LOG_DIR_SUFFIX)),
            log_file: None,
            history_limit: None,
        }
    }
}

impl MonitorConfig {
    /// Creates a config scanning a custom log directory.
    /// Used for testing with temp directories.
    pub fn with_log_dir(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: Some(log_dir.into()),
            log_file: None,
            history_limit: None,
        }
    }

    /// Pins the monitor to one log file, bypassing directory selection.
    /// An empty path is treated as "no override".
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.log_file = (!path.as_os_str().is_empty()).then_some(path);
        self
    }

    /// Caps how many archived sessions are retained, newest first.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn log_dir_path(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn history_limit_value(&self) -> Option<usize> {
        self.history_limit
    }
}
