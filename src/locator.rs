//! Selects which client log file to replay.
//!
//! Selection is best-effort: a missing or unreadable directory means "no
//! file selected" and the monitor keeps serving its prior state. The first
//! successful selection is cached and not re-derived; callers that detect
//! log rotation re-arm selection through [`LogFileLocator::reset`].

use crate::config::MonitorConfig;
use crate::error::{PresenceError, Result};
use crate::patterns::RE_LOG_FILENAME;
use fs_err as fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extension of the client's log files.
const LOG_EXTENSION: &str = "log";

/// Finds the most relevant player log file in the configured directory.
#[derive(Debug)]
pub struct LogFileLocator {
    log_dir: Option<PathBuf>,
    explicit: Option<PathBuf>,
    selected: Option<PathBuf>,
}

impl LogFileLocator {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            log_dir: config.log_dir_path().map(Path::to_path_buf),
            explicit: config.log_file_path().map(Path::to_path_buf),
            selected: None,
        }
    }

    /// Path of the log file to parse, or `None` when nothing suitable
    /// exists. Caches the first successful selection.
    pub fn locate(&mut self) -> Option<&Path> {
        if self.selected.is_none() {
            match self.select() {
                Ok(path) => self.selected = Some(path),
                Err(err) => {
                    tracing::debug!(error = %err, "No log file selected");
                }
            }
        }
        self.selected.as_deref()
    }

    /// Drops the cached selection so the next [`locate`](Self::locate)
    /// re-runs it.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    fn select(&self) -> Result<PathBuf> {
        // An explicit override wins verbatim; no selection logic runs.
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }

        let dir = self
            .log_dir
            .as_ref()
            .ok_or(PresenceError::HomeDirUnavailable)?;
        let entries = fs::read_dir(dir).map_err(|_| PresenceError::LogDirNotFound(dir.clone()))?;

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(LOG_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !RE_LOG_FILENAME.is_match(name) {
                continue;
            }
            // Candidates whose metadata cannot be read are skipped, not fatal.
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            let Ok(modified) = metadata.modified() else {
                continue;
            };
            match &newest {
                Some((best, _)) if *best >= modified => {}
                _ => newest = Some((modified, path)),
            }
        }

        newest
            .map(|(_, path)| path)
            .ok_or_else(|| PresenceError::NoLogFile(dir.clone()))
    }
}
