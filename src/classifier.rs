//! Ordered trigger tables mapping log payloads to entry kinds.
//!
//! Classification is region-scoped: each parse region exposes its own
//! ordered marker list and the first substring match wins. The leaving
//! marker is tested before any region table, in every region; its guard
//! (reset only when a join is pending) lives in the state machine.

/// Which part of the join lifecycle the state machine is in.
///
/// Derived from the current session fields, never stored directly:
/// `Idle` is `place_id == 0`, `Joining` is a pending join, `Joined` is a
/// confirmed connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Idle,
    Joining,
    Joined,
}

/// The fixed set of recognized log entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The client is leaving; only meaningful while a join is pending.
    Leaving,
    /// A private-server join announced its access code.
    PrivateServerJoin,
    /// A join was announced with job id, place id, and server address.
    JoiningGame,
    /// Load-time report carrying user and universe ids.
    JoinReport,
    /// Relay discovery revealed the externally-reachable server address.
    UdmuxDiscovery,
    /// The connection to the announced server completed.
    Joined,
    /// The connected session ended.
    Disconnected,
    /// An in-session teleport to another place was initiated.
    TeleportInitiated,
    /// A teleport into a reserved server was initiated.
    ReservedServerTeleport,
    /// The client surfaced a structured RPC payload.
    RpcMessage,
}

// Markers as written by the client, channel prefix included.
pub const GAME_LEAVING: &str = "[FLog::SingleSurfaceApp] leaveUGCGameInternal";
pub const GAME_JOINING_PRIVATE_SERVER: &str =
    "[FLog::GameJoinUtil] GameJoinUtil::joinGamePostPrivateServer";
pub const GAME_JOINING: &str = "[FLog::Output] ! Joining game";
pub const GAME_JOIN_REPORT: &str = "[FLog::GameJoinLoadTime] Report game_join_loadtime:";
pub const GAME_UDMUX: &str = "[FLog::Network] UDMUX Address = ";
pub const GAME_JOINED: &str = "[FLog::Network] serverId:";
pub const GAME_DISCONNECTED: &str = "[FLog::Network] Time to disconnect replication data:";
pub const GAME_TELEPORTING: &str = "[FLog::SingleSurfaceApp] initiateTeleport";
pub const GAME_JOINING_RESERVED_SERVER: &str =
    "[FLog::GameJoinUtil] GameJoinUtil::initiateTeleportToReservedServer";
pub const GAME_RPC_MESSAGE: &str = "[FLog::Output] [BloxstrapRPC]";

/// Tested before any region table, in every region.
const UNCONDITIONAL_TRIGGERS: &[(&str, EntryKind)] = &[(GAME_LEAVING, EntryKind::Leaving)];

const IDLE_TRIGGERS: &[(&str, EntryKind)] = &[
    (GAME_JOINING_PRIVATE_SERVER, EntryKind::PrivateServerJoin),
    (GAME_JOINING, EntryKind::JoiningGame),
];

const JOINING_TRIGGERS: &[(&str, EntryKind)] = &[
    (GAME_JOIN_REPORT, EntryKind::JoinReport),
    (GAME_UDMUX, EntryKind::UdmuxDiscovery),
    (GAME_JOINED, EntryKind::Joined),
];

const JOINED_TRIGGERS: &[(&str, EntryKind)] = &[
    (GAME_DISCONNECTED, EntryKind::Disconnected),
    (GAME_JOINING_RESERVED_SERVER, EntryKind::ReservedServerTeleport),
    (GAME_TELEPORTING, EntryKind::TeleportInitiated),
    (GAME_RPC_MESSAGE, EntryKind::RpcMessage),
];

/// Classifies one content payload against the triggers allowed in `region`.
/// Returns `None` for lines the monitor does not interpret.
pub fn classify(content: &str, region: Region) -> Option<EntryKind> {
    let table = match region {
        Region::Idle => IDLE_TRIGGERS,
        Region::Joining => JOINING_TRIGGERS,
        Region::Joined => JOINED_TRIGGERS,
    };

    UNCONDITIONAL_TRIGGERS
        .iter()
        .chain(table)
        .find(|(marker, _)| content.contains(marker))
        .map(|&(_, kind)| kind)
}
