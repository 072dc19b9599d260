//! Pairwise conflict scanning.
//!
//! Finds every pair of same-day blocks whose time ranges intersect.
//! Quadratic over the block count, which is bounded by a single
//! course section's weekly blocks (single digits in practice).
//!
//! Scanning has no side effects and rejects nothing — an overlap
//! simply appears in the returned report for the caller to display.

use serde::{Deserialize, Serialize};

use crate::models::ScheduleBlock;

/// One detected overlap between two blocks on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// First block of the pair, in input order.
    pub first: ScheduleBlock,
    /// Second block of the pair.
    pub second: ScheduleBlock,
    /// Human-readable description naming the day and both ranges.
    pub message: String,
}

/// Result of scanning a schedule for overlaps.
///
/// An empty report means the schedule is conflict-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// All overlapping pairs, in input pair order.
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// Whether any overlap was found.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Number of overlapping pairs.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Scans all unordered pairs of blocks for same-day overlaps.
///
/// Pairs on different days are never compared. Each overlapping pair
/// produces exactly one [`Conflict`].
pub fn find_conflicts(blocks: &[ScheduleBlock]) -> ConflictReport {
    let mut conflicts = Vec::new();

    for (i, first) in blocks.iter().enumerate() {
        for second in &blocks[i + 1..] {
            if first.overlaps(second) {
                conflicts.push(Conflict {
                    first: first.clone(),
                    second: second.clone(),
                    message: format!(
                        "{}: {} overlaps {}",
                        first.day,
                        first.time_range(),
                        second.time_range()
                    ),
                });
            }
        }
    }

    ConflictReport { conflicts }
}
