//! # rbx-presence
//!
//! Reconstructs the Roblox client's session activity (queued → joining →
//! joined → disconnected, including teleports and private/reserved servers)
//! by replaying the client's own log file through a guarded state machine.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Clients can wrap with a
//!   poller or async layer if needed.
//! - **Not thread-safe**: Clients provide their own synchronization
//!   (`Mutex`, `RwLock`) when querying from multiple threads.
//! - **Graceful degradation**: A missing or unreadable log file leaves the
//!   prior in-memory state intact; queries never return errors.
//! - **Replay-safe**: Every query re-reads the whole log file and
//!   re-derives state deterministically; repeated polls are idempotent.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rbx_presence::ActivityMonitor;
//!
//! let mut monitor = ActivityMonitor::new();
//! if let Some(activity) = monitor.game_playing() {
//!     println!("in game: place {}", activity.place_id);
//! }
//! ```

// Public modules
pub mod classifier;
pub mod config;
pub mod error;
pub mod framer;
pub mod locator;
pub mod monitor;
pub mod patterns;
pub mod types;

// Re-export commonly used items at crate root
pub use classifier::{EntryKind, Region};
pub use config::MonitorConfig;
pub use error::{PresenceError, Result};
pub use framer::FramedLine;
pub use locator::LogFileLocator;
pub use monitor::ActivityMonitor;
pub use types::{ActivityData, RpcMessage, ServerType, MAX_LAUNCH_DATA_LEN};
