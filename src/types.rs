//! Core types shared with downstream clients.
//!
//! `ActivityData` is the "lingua franca" of the monitor: the state machine
//! mutates one instance in place while a join is in flight, and archives a
//! frozen copy into history once the session disconnects. All client-facing
//! types derive serde so UI layers can serialize snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest `SetLaunchData` payload the monitor will retain, in characters.
/// Oversized payloads are discarded, not truncated.
pub const MAX_LAUNCH_DATA_LEN: usize = 200;

/// Which non-public server variant a session runs on.
///
/// A regular public server is represented by the absence of a value, never
/// by a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerType {
    /// Joined through an access code.
    Private,
    /// A non-public job instance reachable only via teleport.
    Reserved,
}

/// One connection attempt/session.
///
/// Mutable while "in progress", frozen once archived. An empty value
/// (`place_id == 0`) means no session is in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityData {
    /// Remote place identifier; `0` means no session in progress.
    pub place_id: u64,
    /// Opaque job identifier, stable for the session.
    pub job_id: String,
    /// Network address of the remote host. May be rewritten once when the
    /// relay discovery line reveals a more specific address.
    pub machine_address: String,
    /// Present only for private-server joins.
    pub access_code: Option<String>,
    pub universe_id: Option<u64>,
    pub user_id: Option<u64>,
    /// True when the session was entered via an in-session teleport rather
    /// than a fresh launch.
    pub is_teleport: Option<bool>,
    pub server_type: Option<ServerType>,
    pub time_joined: Option<DateTime<Utc>>,
    pub time_left: Option<DateTime<Utc>>,
    /// Small payload surfaced by the client via an RPC log line.
    pub rpc_launch_data: Option<String>,
}

impl ActivityData {
    /// Whether a join has been announced (completed or not).
    pub fn in_progress(&self) -> bool {
        self.place_id != 0
    }
}

/// Structured payload embedded in an RPC log line.
///
/// Consumed immediately to mutate the current session; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcMessage {
    pub command: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_activity_is_not_in_progress() {
        let activity = ActivityData::default();
        assert_eq!(activity.place_id, 0);
        assert!(!activity.in_progress());
        assert!(activity.server_type.is_none());
    }

    #[test]
    fn activity_round_trips_through_serde() {
        let activity = ActivityData {
            place_id: 1818,
            job_id: "0c0792ba-a2b9-4392-9906-4a368ce1a2a5".to_string(),
            machine_address: "10.0.0.1".to_string(),
            server_type: Some(ServerType::Reserved),
            ..Default::default()
        };

        let json = serde_json::to_string(&activity).unwrap();
        let back: ActivityData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, activity);
    }

    #[test]
    fn rpc_message_parses_with_string_data() {
        let message: RpcMessage =
            serde_json::from_str(r#"{"command":"SetLaunchData","data":"\"hello\""}"#).unwrap();
        assert_eq!(message.command, "SetLaunchData");
        assert_eq!(message.data.as_str(), Some("\"hello\""));
    }

    #[test]
    fn rpc_message_tolerates_missing_data() {
        let message: RpcMessage = serde_json::from_str(r#"{"command":"Noop"}"#).unwrap();
        assert_eq!(message.command, "Noop");
        assert!(message.data.is_null());
    }
}
