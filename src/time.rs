//! Time-of-day arithmetic.
//!
//! All schedule comparisons run on an integer minute-of-day
//! (`0..1440`, Monday 08:00 → 480). The textual `HH:MM` form exists
//! only at the serialization edge; it is normalized to minutes on
//! input so overlap and duration arithmetic stay exact-integer.
//!
//! # Contract
//!
//! Malformed time text is a caller bug, not user input — parsing
//! fails fast with [`TimeParseError`] rather than producing garbage
//! minutes.

use thiserror::Error;

/// Minutes in one calendar day. Times at or past this value have no
/// meaning here (no midnight wraparound).
pub const MINUTES_PER_DAY: u16 = 1440;

/// Error raised for time text that is not well-formed `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Input is not two colon-separated fields.
    #[error("expected HH:MM, got '{0}'")]
    Malformed(String),
    /// Hour field outside 0..=23.
    #[error("hour out of range in '{0}'")]
    HourOutOfRange(String),
    /// Minute field outside 0..=59.
    #[error("minute out of range in '{0}'")]
    MinuteOutOfRange(String),
}

/// Parses `HH:MM` text into minutes since midnight.
///
/// ```
/// use timetable_core::time::time_to_minutes;
/// assert_eq!(time_to_minutes("08:30"), Ok(510));
/// assert!(time_to_minutes("8h30").is_err());
/// ```
pub fn time_to_minutes(text: &str) -> Result<u16, TimeParseError> {
    let (hh, mm) = text
        .split_once(':')
        .ok_or_else(|| TimeParseError::Malformed(text.to_string()))?;

    let hours: u16 = hh
        .parse()
        .map_err(|_| TimeParseError::Malformed(text.to_string()))?;
    let minutes: u16 = mm
        .parse()
        .map_err(|_| TimeParseError::Malformed(text.to_string()))?;

    if hours > 23 {
        return Err(TimeParseError::HourOutOfRange(text.to_string()));
    }
    if minutes > 59 {
        return Err(TimeParseError::MinuteOutOfRange(text.to_string()));
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
///
/// Values ≥ [`MINUTES_PER_DAY`] are out of contract.
pub fn minutes_to_time(minutes: u16) -> String {
    debug_assert!(minutes < MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Whether two same-day time ranges intersect.
///
/// Ranges behave as half-open intervals: touching boundaries
/// (`end_a == start_b`) do not overlap. That equality is what the
/// consolidator treats as "contiguous".
#[inline]
pub fn ranges_overlap(start_a: u16, end_a: u16, start_b: u16, end_b: u16) -> bool {
    start_a < end_b && start_b < end_a
}

/// Serde adapter carrying minute-of-day fields as `HH:MM` text.
///
/// Used via `#[serde(with = "crate::time::hhmm")]` on block and range
/// time fields.
pub mod hhmm {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{minutes_to_time, time_to_minutes};

    pub fn serialize<S: Serializer>(minutes: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&minutes_to_time(*minutes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        let text = String::deserialize(deserializer)?;
        time_to_minutes(&text).map_err(de::Error::custom)
    }
}
