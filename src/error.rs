//! Error types for rbx-presence internals.
//!
//! Nothing here crosses the public query surface: the monitor absorbs every
//! error after logging it and keeps serving the prior in-memory state.

use std::path::PathBuf;

/// All errors that can occur while locating or reading the client log.
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("Home directory unavailable")]
    HomeDirUnavailable,

    #[error("Log directory not found: {0}")]
    LogDirNotFound(PathBuf),

    #[error("No log file matched the naming convention in {0}")]
    NoLogFile(PathBuf),

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using PresenceError.
pub type Result<T> = std::result::Result<T, PresenceError>;
