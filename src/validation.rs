//! Insertion validation for candidate blocks.
//!
//! Checks a candidate block against the duration business rules and
//! the existing schedule before it is accepted. Checks run in a fixed
//! order and stop at the first failure:
//! 1. Start strictly before end
//! 2. Duration at least [`MIN_BLOCK_MIN`]
//! 3. Duration at most [`MAX_BLOCK_MIN`]
//! 4. No overlap with an existing same-day block (first hit wins,
//!    in caller-supplied order)
//!
//! Business-rule failures are returned values, never panics — the
//! caller displays the message inline and declines to persist.

use serde::{Deserialize, Serialize};

use crate::models::ScheduleBlock;

/// Minimum accepted class duration, minutes.
pub const MIN_BLOCK_MIN: u16 = 30;

/// Maximum accepted class duration, minutes.
pub const MAX_BLOCK_MIN: u16 = 240;

/// A rejected candidate block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description for inline display.
    pub message: String,
}

/// Categories of insertion-validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Start time is not strictly before end time.
    StartNotBeforeEnd,
    /// Duration below the minimum class length.
    TooShort,
    /// Duration above the maximum class length.
    TooLong,
    /// Candidate intersects an existing same-day block.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a candidate block against the existing schedule.
///
/// Returns `Ok(())` if the candidate may be inserted. Nothing is
/// mutated either way — persisting the accepted block is the
/// caller's decision.
pub fn validate_new_block(
    candidate: &ScheduleBlock,
    existing: &[ScheduleBlock],
) -> Result<(), ValidationError> {
    if candidate.start_min >= candidate.end_min {
        return Err(ValidationError::new(
            ValidationErrorKind::StartNotBeforeEnd,
            "start must precede end",
        ));
    }

    let duration = candidate.duration_min();
    if duration < MIN_BLOCK_MIN {
        return Err(ValidationError::new(
            ValidationErrorKind::TooShort,
            format!("minimum class duration is {MIN_BLOCK_MIN} minutes"),
        ));
    }
    if duration > MAX_BLOCK_MIN {
        return Err(ValidationError::new(
            ValidationErrorKind::TooLong,
            "maximum class duration is 4 hours",
        ));
    }

    for block in existing {
        if candidate.overlaps(block) {
            return Err(ValidationError::new(
                ValidationErrorKind::Overlap,
                format!(
                    "overlaps existing block {} on {}",
                    block.time_range(),
                    block.day
                ),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn block(day: Weekday, start: &str, end: &str) -> ScheduleBlock {
        ScheduleBlock::from_times(day, start, end, "A-101").unwrap()
    }

    #[test]
    fn test_accepts_valid_candidate() {
        let existing = vec![block(Weekday::Monday, "08:00", "10:00")];
        let candidate = block(Weekday::Monday, "14:00", "16:00");
        assert!(validate_new_block(&candidate, &existing).is_ok());
    }

    #[test]
    fn test_rejects_inverted_times() {
        let candidate = block(Weekday::Monday, "10:00", "08:00");
        let err = validate_new_block(&candidate, &[]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::StartNotBeforeEnd);
        assert_eq!(err.message, "start must precede end");
    }

    #[test]
    fn test_rejects_zero_duration() {
        let candidate = block(Weekday::Monday, "08:00", "08:00");
        let err = validate_new_block(&candidate, &[]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::StartNotBeforeEnd);
    }

    #[test]
    fn test_duration_boundaries() {
        // 29 min rejected, 30 min accepted
        let short = block(Weekday::Monday, "08:00", "08:29");
        let err = validate_new_block(&short, &[]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TooShort);

        let minimum = block(Weekday::Monday, "08:00", "08:30");
        assert!(validate_new_block(&minimum, &[]).is_ok());

        // 240 min accepted, 241 min rejected
        let maximum = block(Weekday::Monday, "08:00", "12:00");
        assert!(validate_new_block(&maximum, &[]).is_ok());

        let long = block(Weekday::Monday, "08:00", "12:01");
        let err = validate_new_block(&long, &[]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TooLong);
    }

    #[test]
    fn test_rejects_overlap_accepts_adjacency() {
        let existing = vec![block(Weekday::Monday, "08:00", "10:00")];

        let overlapping = block(Weekday::Monday, "09:00", "11:00");
        let err = validate_new_block(&overlapping, &existing).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Overlap);
        assert!(err.message.contains("08:00-10:00"));
        assert!(err.message.contains("Monday"));

        let adjacent = block(Weekday::Monday, "10:00", "12:00");
        assert!(validate_new_block(&adjacent, &existing).is_ok());
    }

    #[test]
    fn test_other_day_never_conflicts() {
        let existing = vec![block(Weekday::Monday, "08:00", "10:00")];
        let candidate = block(Weekday::Tuesday, "08:00", "10:00");
        assert!(validate_new_block(&candidate, &existing).is_ok());
    }

    #[test]
    fn test_first_conflict_in_caller_order_wins() {
        let existing = vec![
            block(Weekday::Monday, "10:00", "12:00"),
            block(Weekday::Monday, "08:00", "10:00"),
        ];
        // Candidate overlaps both; the error names the first in slice order.
        let candidate = block(Weekday::Monday, "09:00", "11:00");
        let err = validate_new_block(&candidate, &existing).unwrap_err();
        assert!(err.message.contains("10:00-12:00"));
    }
}
