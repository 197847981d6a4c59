//! Lenient parsers for the date-entry and duration cells.
//!
//! Neither parser fails: malformed input maps to a sentinel value.

use crate::models::{ParsedDuration, ParsedTimestamp};
use chrono::{NaiveDateTime, Timelike};

/// The only accepted layout for entry timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a `YYYY-MM-DD HH:MM:SS` cell; anything else is `Missing`.
pub fn parse_timestamp(raw: &str) -> ParsedTimestamp {
    let s = raw.trim();
    if !has_timestamp_shape(s) {
        return ParsedTimestamp::Missing;
    }
    match NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        // chrono stores a leap second (`:60`) as nanos past one billion
        Ok(dt) if dt.nanosecond() >= 1_000_000_000 => ParsedTimestamp::Missing,
        Ok(dt) => ParsedTimestamp::Parsed(dt),
        Err(_) => ParsedTimestamp::Missing,
    }
}

/// Byte layout of `YYYY-MM-DD HH:MM:SS`: `d` is an ASCII digit, others literal.
const TIMESTAMP_SHAPE: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

// chrono's parser tolerates padding and longer years, so the layout is checked first.
fn has_timestamp_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == TIMESTAMP_SHAPE.len()
        && b.iter().zip(TIMESTAMP_SHAPE).all(|(c, want)| match *want {
            b'd' => c.is_ascii_digit(),
            sep => *c == sep,
        })
}

/// Parse an `H:MM` cell into minutes; anything else is `Zero`.
///
/// The cell is split once, at the first colon, so `"1:30:00"` leaves
/// `"30:00"` as minutes and falls back to zero.
pub fn parse_duration(raw: &str) -> ParsedDuration {
    let Some((h, m)) = raw.trim().split_once(':') else {
        return ParsedDuration::Zero;
    };

    match (parse_part(h), parse_part(m)) {
        (Some(hours), Some(minutes)) => hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .map(ParsedDuration::Parsed)
            .unwrap_or(ParsedDuration::Zero),
        _ => ParsedDuration::Zero,
    }
}

fn parse_part(s: &str) -> Option<u64> {
    let s = s.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
