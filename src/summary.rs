//! Weekly aggregates and display summaries.
//!
//! Read-only projections over a schedule: total teaching hours,
//! which days have classes, and a one-line text rendering. All day
//! iteration follows the canonical Monday→Sunday order regardless of
//! input order.

use crate::models::{ScheduleBlock, Weekday};

/// Summary text for a schedule with no blocks.
pub const NO_SCHEDULE: &str = "no schedule configured";

/// Total weekly teaching hours, rounded half-up to one decimal.
///
/// Sums every block's duration regardless of day or overlap.
pub fn weekly_hours(blocks: &[ScheduleBlock]) -> f64 {
    let total_min: u32 = blocks.iter().map(|b| u32::from(b.duration_min())).sum();
    (f64::from(total_min) / 60.0 * 10.0).round() / 10.0
}

/// Distinct days that have at least one block, Monday→Sunday.
pub fn class_days(blocks: &[ScheduleBlock]) -> Vec<Weekday> {
    Weekday::ALL
        .into_iter()
        .filter(|&day| blocks.iter().any(|b| b.day == day))
        .collect()
}

/// One-line rendering of the whole schedule.
///
/// Per day with blocks: `"<Day>: <start>-<end>, ..."` with that day's
/// blocks sorted by start time; day segments joined by `" | "`. An
/// empty schedule yields the [`NO_SCHEDULE`] sentinel rather than an
/// empty string.
pub fn summarize(blocks: &[ScheduleBlock]) -> String {
    let mut segments = Vec::new();

    for day in Weekday::ALL {
        let mut day_blocks: Vec<&ScheduleBlock> =
            blocks.iter().filter(|b| b.day == day).collect();
        if day_blocks.is_empty() {
            continue;
        }
        day_blocks.sort_by_key(|b| b.start_min);

        let times: Vec<String> = day_blocks.iter().map(|b| b.time_range()).collect();
        segments.push(format!("{}: {}", day, times.join(", ")));
    }

    if segments.is_empty() {
        NO_SCHEDULE.to_string()
    } else {
        segments.join(" | ")
    }
}
