//! Timetable domain models.
//!
//! The core data types the scheduling functions operate over. A
//! schedule is just a caller-supplied slice of [`ScheduleBlock`] —
//! this crate owns no collection type and no state.

mod block;
mod range;

pub use block::{ParseWeekdayError, ScheduleBlock, Weekday};
pub use range::ConsolidatedRange;
