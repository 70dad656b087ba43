//! Compiled regex patterns for parsing Roblox client logs.
//!
//! These patterns are compiled once on first use and reused across replays.
//! Update these when the client's log or filename formats change.

use once_cell::sync::Lazy;
use regex::Regex;

// ═══════════════════════════════════════════════════════════════════════════════
// Log File Selection
// ═══════════════════════════════════════════════════════════════════════════════

/// Naming convention of a player log file:
/// `<dotted-version>_<YYYYMMDD>T<HHMMSS>Z_Player_<hash>_last.log`.
pub static RE_LOG_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(?:\.\d+)+_\d{8}T\d{6}Z_Player_[0-9A-Za-z]+_last\.log$").unwrap()
});

// ═══════════════════════════════════════════════════════════════════════════════
// Line Framing
// ═══════════════════════════════════════════════════════════════════════════════

/// `<ISO-8601-millis-Z>,<float>,<hex-id>,<int> <content>`
pub static RE_LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z),\d+\.\d+,[0-9a-f]+,\d+ (.*)$")
        .unwrap()
});

// ═══════════════════════════════════════════════════════════════════════════════
// Payload Captures
// ═══════════════════════════════════════════════════════════════════════════════

/// `Joining game '<jobid>' place <placeid> at <address>`
pub static RE_JOINING_GAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Joining game '([0-9a-f\-]{36})' place (\d+) at ([\d\.]+)").unwrap());

/// Quoted access code inside a private-server join payload.
pub static RE_ACCESS_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""accessCode":"([^"]+)""#).unwrap());

/// `userid:<N> ... universeid:<M>` inside a join-loadtime report.
pub static RE_JOIN_REPORT_IDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)userid:\s*(\d+).*universeid:\s*(\d+)").unwrap());

/// `UDMUX Address = <A>, Port = ... | RCC Server Address = <B>, Port = ...`
pub static RE_UDMUX_ADDRESSES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"UDMUX Address = ([\d\.]+), Port = \d+ \| RCC Server Address = ([\d\.]+), Port = \d+")
        .unwrap()
});

/// `serverId: <address>|<port>`
pub static RE_SERVER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"serverId: ([\d\.]+)\|(\d+)").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_pattern_accepts_player_logs() {
        assert!(RE_LOG_FILENAME
            .is_match("0.645.0.6450420_20260830T120000Z_Player_1A2B3C4D5E_last.log"));
    }

    #[test]
    fn filename_pattern_rejects_studio_and_misnamed_logs() {
        assert!(!RE_LOG_FILENAME
            .is_match("0.645.0.6450420_20260830T120000Z_Studio_1A2B3C4D5E_last.log"));
        assert!(!RE_LOG_FILENAME.is_match("crash.log"));
        assert!(!RE_LOG_FILENAME
            .is_match("0.645.0.6450420_20260830T120000Z_Player_1A2B3C4D5E_last.txt"));
    }

    #[test]
    fn joining_pattern_captures_job_place_and_address() {
        let caps = RE_JOINING_GAME
            .captures("! Joining game '0c0792ba-a2b9-4392-9906-4a368ce1a2a5' place 1818 at 128.116.5.3")
            .unwrap();
        assert_eq!(&caps[1], "0c0792ba-a2b9-4392-9906-4a368ce1a2a5");
        assert_eq!(&caps[2], "1818");
        assert_eq!(&caps[3], "128.116.5.3");
    }

    #[test]
    fn join_report_ids_match_case_insensitively() {
        let caps = RE_JOIN_REPORT_IDS
            .captures("Report game_join_loadtime: placeid:1818, UserID:1234, universeid:5678")
            .unwrap();
        assert_eq!(&caps[1], "1234");
        assert_eq!(&caps[2], "5678");
    }

    #[test]
    fn udmux_pattern_captures_both_addresses() {
        let caps = RE_UDMUX_ADDRESSES
            .captures("UDMUX Address = 203.0.113.9, Port = 54321 | RCC Server Address = 128.116.5.3, Port = 64989")
            .unwrap();
        assert_eq!(&caps[1], "203.0.113.9");
        assert_eq!(&caps[2], "128.116.5.3");
    }
}
