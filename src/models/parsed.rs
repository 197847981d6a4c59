//! Outcome types of the lenient field parsers.
//!
//! A failed parse is a value, not an error: callers get a sentinel and may
//! log it, but processing always continues.

use chrono::{Datelike, NaiveDateTime};

/// Entry timestamp of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    Parsed(NaiveDateTime),
    /// The raw cell did not match `YYYY-MM-DD HH:MM:SS`.
    Missing,
}

impl ParsedTimestamp {
    pub fn value(&self) -> Option<NaiveDateTime> {
        match self {
            ParsedTimestamp::Parsed(dt) => Some(*dt),
            ParsedTimestamp::Missing => None,
        }
    }

    pub fn day(&self) -> Option<u32> {
        self.value().map(|dt| dt.day())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ParsedTimestamp::Missing)
    }
}

/// Dwell time of a record, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDuration {
    Parsed(u64),
    /// The raw cell was not `H:MM`; counts as a zero-length duration.
    Zero,
}

impl ParsedDuration {
    pub fn minutes(&self) -> u64 {
        match self {
            ParsedDuration::Parsed(m) => *m,
            ParsedDuration::Zero => 0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedDuration::Zero)
    }
}
