//! The session state machine, activity history, and query surface.
//!
//! Every query replays the entire located log file through the state
//! machine, rebuilding current state and history from scratch. A replay is
//! a deterministic function of the file content, so repeated polls over an
//! unchanged file yield identical state and never double-archive. Within
//! one pass, each trigger is only allowed in the region that precedes its
//! effect: once it has fired for a session the region guard is false, so a
//! duplicate line is a no-op. Changing a guard here breaks that invariant.
//!
//! A failed locate or read skips the rebuild entirely and leaves the prior
//! in-memory state intact.

use crate::classifier::{classify, EntryKind, Region, GAME_RPC_MESSAGE};
use crate::config::MonitorConfig;
use crate::error::{PresenceError, Result};
use crate::framer::frame_line;
use crate::locator::LogFileLocator;
use crate::patterns::{
    RE_ACCESS_CODE, RE_JOINING_GAME, RE_JOIN_REPORT_IDS, RE_SERVER_ID, RE_UDMUX_ADDRESSES,
};
use crate::types::{ActivityData, RpcMessage, ServerType, MAX_LAUNCH_DATA_LEN};
use chrono::{DateTime, Utc};
use fs_err as fs;
use std::path::Path;

/// RPC command that attaches launch data to the current session.
const COMMAND_SET_LAUNCH_DATA: &str = "SetLaunchData";

/// Reconstructs session activity from the Roblox client's log file.
///
/// Not thread-safe: clients that add a background poller must wrap the
/// monitor in their own `Mutex`, since queries mutate replay state.
#[derive(Debug)]
pub struct ActivityMonitor {
    locator: LogFileLocator,
    history_limit: Option<usize>,
    /// The one session currently being assembled. Empty (`place_id == 0`)
    /// when nothing is in progress.
    current: ActivityData,
    in_game: bool,
    /// Set by a teleport line; consumed by the next join announcement.
    teleport_pending: bool,
    /// Set by a reserved-server teleport line; consumed alongside
    /// `teleport_pending`.
    reserved_pending: bool,
    /// Completed sessions, most recent first.
    history: Vec<ActivityData>,
    /// Sessions archived before the last [`reset`](Self::reset). The
    /// rotated file no longer contains them, so each rebuild splices them
    /// back behind the entries re-derived from the current file.
    baseline: Vec<ActivityData>,
}

impl Default for ActivityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityMonitor {
    /// Creates a monitor watching the client's default log directory.
    pub fn new() -> Self {
        Self::with_config(MonitorConfig::default())
    }

    pub fn with_config(config: MonitorConfig) -> Self {
        Self {
            locator: LogFileLocator::new(&config),
            history_limit: config.history_limit_value(),
            current: ActivityData::default(),
            in_game: false,
            teleport_pending: false,
            reserved_pending: false,
            history: Vec::new(),
            baseline: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query surface
    // ─────────────────────────────────────────────────────────────────────

    /// Replays the log and returns a snapshot of the current (possibly
    /// empty) session.
    pub fn current_activity(&mut self) -> ActivityData {
        self.replay();
        self.current.clone()
    }

    /// Replays the log and reports whether the client is connected to a
    /// server.
    pub fn is_in_game(&mut self) -> bool {
        self.replay();
        self.in_game
    }

    /// Replays the log and returns the current session only once its join
    /// has completed.
    pub fn game_playing(&mut self) -> Option<ActivityData> {
        self.replay();
        self.in_game.then(|| self.current.clone())
    }

    /// Completed sessions, most recent first. Reads materialized state
    /// without triggering a replay.
    pub fn history(&self) -> &[ActivityData] {
        &self.history
    }

    /// Re-arms the monitor after log rotation: drops the in-flight session,
    /// pending teleport markers, and the cached file selection. History is
    /// kept, and sessions archived before the reset survive replays of the
    /// rotated file.
    pub fn reset(&mut self) {
        self.locator.reset();
        self.clear_current();
        self.teleport_pending = false;
        self.reserved_pending = false;
        self.baseline = self.history.clone();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Replay
    // ─────────────────────────────────────────────────────────────────────

    fn replay(&mut self) {
        let Some(path) = self.locator.locate().map(Path::to_path_buf) else {
            return;
        };
        let content = match read_log(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(error = %err, "Replay skipped; keeping prior state");
                return;
            }
        };

        // Rebuild from scratch. The file was read successfully, so the
        // pass below fully re-derives current state and history.
        self.clear_current();
        self.teleport_pending = false;
        self.reserved_pending = false;
        self.history.clear();

        for line in content.lines() {
            let Some(framed) = frame_line(line) else {
                continue;
            };
            self.apply(framed.timestamp, framed.content);
        }

        // Sessions archived before a reset are absent from the file just
        // replayed; splice them back behind the rebuilt entries. Entries
        // the rebuild already produced are skipped, so a reset without an
        // actual rotation does not duplicate history.
        if !self.baseline.is_empty() {
            let carried: Vec<ActivityData> = self
                .baseline
                .iter()
                .filter(|session| !self.history.contains(*session))
                .cloned()
                .collect();
            self.history.extend(carried);
            if let Some(limit) = self.history_limit {
                self.history.truncate(limit);
            }
        }
    }

    /// Region derived from the current session fields, never stored.
    fn region(&self) -> Region {
        if self.in_game {
            Region::Joined
        } else if self.current.in_progress() {
            Region::Joining
        } else {
            Region::Idle
        }
    }

    fn apply(&mut self, timestamp: DateTime<Utc>, content: &str) {
        let Some(kind) = classify(content, self.region()) else {
            return;
        };
        match kind {
            EntryKind::Leaving => self.on_leaving(),
            EntryKind::PrivateServerJoin => self.on_private_server_join(content),
            EntryKind::JoiningGame => self.on_joining(content),
            EntryKind::JoinReport => self.on_join_report(content),
            EntryKind::UdmuxDiscovery => self.on_udmux_discovery(content),
            EntryKind::Joined => self.on_joined(timestamp, content),
            EntryKind::Disconnected => self.on_disconnected(timestamp),
            EntryKind::TeleportInitiated => self.teleport_pending = true,
            EntryKind::ReservedServerTeleport => {
                self.teleport_pending = true;
                self.reserved_pending = true;
            }
            EntryKind::RpcMessage => self.on_rpc_message(content),
        }
    }

    fn on_leaving(&mut self) {
        // A join abandoned before completing. While in-game the leaving
        // line is ignored; teardown belongs to the disconnect entry.
        if self.current.in_progress() && !self.in_game {
            tracing::debug!(place_id = self.current.place_id, "Join abandoned");
            self.clear_current();
        }
    }

    fn on_private_server_join(&mut self, content: &str) {
        // Tags metadata for the join announcement that follows; no
        // transition of its own.
        self.current.server_type = Some(ServerType::Private);
        if let Some(caps) = RE_ACCESS_CODE.captures(content) {
            self.current.access_code = Some(caps[1].to_string());
        }
    }

    fn on_joining(&mut self, content: &str) {
        let Some(caps) = RE_JOINING_GAME.captures(content) else {
            return;
        };
        let Ok(place_id) = caps[2].parse::<u64>() else {
            return;
        };

        self.current.job_id = caps[1].to_string();
        self.current.place_id = place_id;
        self.current.machine_address = caps[3].to_string();

        if self.teleport_pending {
            self.current.is_teleport = Some(true);
            self.teleport_pending = false;
        }
        if self.reserved_pending {
            self.current.server_type = Some(ServerType::Reserved);
            self.reserved_pending = false;
        }

        tracing::debug!(
            place_id,
            job_id = %self.current.job_id,
            address = %self.current.machine_address,
            "Joining game"
        );
    }

    fn on_join_report(&mut self, content: &str) {
        let Some(caps) = RE_JOIN_REPORT_IDS.captures(content) else {
            return;
        };
        self.current.user_id = caps[1].parse().ok();
        self.current.universe_id = caps[2].parse().ok();
    }

    fn on_udmux_discovery(&mut self, content: &str) {
        let Some(caps) = RE_UDMUX_ADDRESSES.captures(content) else {
            return;
        };
        // The relay address supersedes the announced server address, but
        // only when the line refers to this join.
        if &caps[2] == self.current.machine_address.as_str() {
            self.current.machine_address = caps[1].to_string();
        }
    }

    fn on_joined(&mut self, timestamp: DateTime<Utc>, content: &str) {
        let Some(caps) = RE_SERVER_ID.captures(content) else {
            return;
        };
        if &caps[1] != self.current.machine_address.as_str() {
            return;
        }
        self.in_game = true;
        self.current.time_joined = Some(timestamp);
        tracing::debug!(place_id = self.current.place_id, "Joined game");
    }

    fn on_disconnected(&mut self, timestamp: DateTime<Utc>) {
        self.current.time_left = Some(timestamp);
        let finished = std::mem::take(&mut self.current);
        self.in_game = false;
        tracing::debug!(place_id = finished.place_id, "Disconnected from game");

        self.history.insert(0, finished);
        if let Some(limit) = self.history_limit {
            self.history.truncate(limit);
        }
    }

    fn on_rpc_message(&mut self, content: &str) {
        let Some(start) = content.find(GAME_RPC_MESSAGE) else {
            return;
        };
        let payload = content[start + GAME_RPC_MESSAGE.len()..].trim();
        let message: RpcMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(error = %err, "Malformed RPC payload ignored");
                return;
            }
        };
        if message.command != COMMAND_SET_LAUNCH_DATA {
            return;
        }
        let Some(data) = message.data.as_str() else {
            return;
        };
        if data.chars().count() > MAX_LAUNCH_DATA_LEN {
            tracing::warn!(
                len = data.chars().count(),
                "Launch data over size limit; discarded"
            );
            return;
        }
        self.current.rpc_launch_data = Some(data.to_string());
    }

    fn clear_current(&mut self) {
        self.current = ActivityData::default();
        self.in_game = false;
    }
}

fn read_log(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PresenceError::Io {
        context: format!("Failed to read log file {}", path.display()),
        source,
    })
}
