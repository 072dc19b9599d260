//! Weekly schedule block model.
//!
//! A block is the atomic scheduling unit: one weekday, a same-day
//! time range, and the room it takes place in. The room label is
//! informational only — overlap logic never reads it.
//!
//! # Day Ordering
//!
//! `Weekday` carries an explicit canonical ordering table
//! ([`Weekday::ALL`], Monday = 0) so day bucketing and display never
//! depend on map iteration order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::time::{self, ranges_overlap, TimeParseError};

/// Day of week with canonical Monday-first ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Error raised for a day label outside the canonical seven.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weekday label '{0}'")]
pub struct ParseWeekdayError(pub String);

impl Weekday {
    /// Canonical display/iteration order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the canonical order (Monday = 0, Sunday = 6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English label, matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}

/// A weekly class block: day, time range, room.
///
/// Times are minute-of-day integers internally and `HH:MM` text at
/// the serialization boundary. Immutable once validated — the core
/// never mutates caller blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    /// Day of week.
    pub day: Weekday,
    /// Start, minutes since midnight (inclusive).
    #[serde(rename = "startTime", with = "crate::time::hhmm")]
    pub start_min: u16,
    /// End, minutes since midnight (exclusive).
    #[serde(rename = "endTime", with = "crate::time::hhmm")]
    pub end_min: u16,
    /// Room label. Opaque, never used in overlap logic.
    pub room: String,
}

impl ScheduleBlock {
    /// Creates a block from minute-of-day values.
    pub fn new(day: Weekday, start_min: u16, end_min: u16, room: impl Into<String>) -> Self {
        Self {
            day,
            start_min,
            end_min,
            room: room.into(),
        }
    }

    /// Creates a block from `HH:MM` text.
    ///
    /// Fails on malformed time text (contract violation, not a
    /// business-rule check — see [`crate::validation`] for those).
    pub fn from_times(
        day: Weekday,
        start: &str,
        end: &str,
        room: impl Into<String>,
    ) -> Result<Self, TimeParseError> {
        Ok(Self::new(
            day,
            time::time_to_minutes(start)?,
            time::time_to_minutes(end)?,
            room,
        ))
    }

    /// Duration in minutes (`end - start`).
    ///
    /// Meaningful only for blocks with `start_min < end_min`.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether this block collides with another: same day AND
    /// intersecting time ranges. Touching blocks do not collide.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && ranges_overlap(self.start_min, self.end_min, other.start_min, other.end_min)
    }

    /// Display form of the time range, e.g. `"08:00-10:00"`.
    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            time::minutes_to_time(self.start_min),
            time::minutes_to_time(self.end_min)
        )
    }
}
