//! Decomposes raw log lines into a timestamp and a content payload.
//!
//! The client frames every line as
//! `<ISO-8601-millis-Z>,<float>,<hex-id>,<int> <content>`. Anything that
//! does not match is dropped without error; the monitor is permissive by
//! design and tracks no "malformed line" category.

use crate::patterns::RE_LOG_LINE;
use chrono::{DateTime, Utc};

/// One log line that matched the client's framing.
#[derive(Debug, Clone, PartialEq)]
pub struct FramedLine<'a> {
    /// Timestamp of the line, used for `time_joined` / `time_left`.
    pub timestamp: DateTime<Utc>,
    /// Free-form payload handed to the classifier.
    pub content: &'a str,
}

/// Splits one raw line into `(timestamp, content)`, or rejects it.
pub fn frame_line(line: &str) -> Option<FramedLine<'_>> {
    let caps = RE_LOG_LINE.captures(line)?;
    let timestamp = DateTime::parse_from_rfc3339(caps.get(1)?.as_str())
        .ok()?
        .with_timezone(&Utc);
    Some(FramedLine {
        timestamp,
        content: caps.get(2)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn frames_a_well_formed_line() {
        let line = "2026-08-30T12:00:01.123Z,4.123456,1f480,6 [FLog::Output] ! Joining game";
        let framed = frame_line(line).expect("line should frame");
        assert_eq!(
            framed.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 1).unwrap()
                + chrono::Duration::milliseconds(123)
        );
        assert_eq!(framed.content, "[FLog::Output] ! Joining game");
    }

    #[test]
    fn rejects_lines_without_framing() {
        assert!(frame_line("").is_none());
        assert!(frame_line("[FLog::Output] no timestamp prefix").is_none());
        // Missing millisecond precision.
        assert!(frame_line("2026-08-30T12:00:01Z,4.1,1f480,6 content").is_none());
        // Uppercase hex identifier is not part of the framing.
        assert!(frame_line("2026-08-30T12:00:01.123Z,4.1,1F480,6 content").is_none());
    }

    #[test]
    fn content_may_be_empty() {
        let framed = frame_line("2026-08-30T12:00:01.123Z,4.1,1f480,6 ").expect("frames");
        assert_eq!(framed.content, "");
    }
}
