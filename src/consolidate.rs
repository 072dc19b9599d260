//! Contiguous-block consolidation.
//!
//! Merges same-day blocks whose boundaries touch exactly
//! (`a.end == b.start`) into single displayable ranges. Any gap, even
//! one minute, starts a new range.
//!
//! Consolidation does not detect overlaps — run
//! [`crate::conflict::find_conflicts`] or
//! [`crate::validation::validate_new_block`] first when
//! overlap-freedom is required.

use crate::models::{ConsolidatedRange, ScheduleBlock, Weekday};

/// Groups blocks into merged per-day ranges.
///
/// Days iterate in canonical Monday→Sunday order and each day's
/// blocks are sorted by start time first, so the output order is
/// independent of input order. Output rooms preserve merge order.
pub fn group_consecutive(blocks: &[ScheduleBlock]) -> Vec<ConsolidatedRange> {
    let mut ranges = Vec::new();

    for day in Weekday::ALL {
        let mut day_blocks: Vec<&ScheduleBlock> =
            blocks.iter().filter(|b| b.day == day).collect();
        day_blocks.sort_by_key(|b| b.start_min);

        let mut iter = day_blocks.into_iter();
        let Some(first) = iter.next() else {
            continue;
        };
        let mut open = ConsolidatedRange {
            day,
            start_min: first.start_min,
            end_min: first.end_min,
            rooms: vec![first.room.clone()],
        };

        for block in iter {
            if block.start_min == open.end_min {
                open.end_min = block.end_min;
                open.rooms.push(block.room.clone());
            } else {
                ranges.push(open);
                open = ConsolidatedRange {
                    day,
                    start_min: block.start_min,
                    end_min: block.end_min,
                    rooms: vec![block.room.clone()],
                };
            }
        }
        ranges.push(open);
    }

    ranges
}
