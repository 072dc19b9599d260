//! Consolidated range projection.
//!
//! A read-only merge of one or more same-day blocks whose boundaries
//! touch exactly. Produced by [`crate::consolidate::group_consecutive`]
//! and recomputed from scratch whenever the input blocks change —
//! never persisted, never mutated after creation.

use serde::{Deserialize, Serialize};

use crate::models::Weekday;
use crate::time;

/// One displayable range: a day, a merged time span, and the rooms of
/// the blocks that formed it (in start-time order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedRange {
    /// Day of week.
    pub day: Weekday,
    /// Merged span start, minutes since midnight.
    #[serde(rename = "startTime", with = "crate::time::hhmm")]
    pub start_min: u16,
    /// Merged span end, minutes since midnight.
    #[serde(rename = "endTime", with = "crate::time::hhmm")]
    pub end_min: u16,
    /// Room labels of the merged blocks, in merge order.
    pub rooms: Vec<String>,
}

impl ConsolidatedRange {
    /// Span duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min - self.start_min
    }

    /// Display form of the merged span, e.g. `"08:00-12:00"`.
    pub fn time_range(&self) -> String {
        format!(
            "{}-{}",
            time::minutes_to_time(self.start_min),
            time::minutes_to_time(self.end_min)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_display_helpers() {
        let r = ConsolidatedRange {
            day: Weekday::Monday,
            start_min: 480,
            end_min: 720,
            rooms: vec!["A-101".into(), "A-102".into()],
        };
        assert_eq!(r.duration_min(), 240);
        assert_eq!(r.time_range(), "08:00-12:00");
    }

    #[test]
    fn test_range_serde_boundary_format() {
        let r = ConsolidatedRange {
            day: Weekday::Wednesday,
            start_min: 540,
            end_min: 660,
            rooms: vec!["B-3".into()],
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "11:00");
        assert_eq!(json["day"], "Wednesday");
    }
}
