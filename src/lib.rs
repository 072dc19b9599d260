//! Class-timetable core for academic administration tools.
//!
//! Provides the conflict-detection, validation, and consolidation
//! logic for weekly course-section schedules. Pure and stateless:
//! every function takes a caller-supplied slice of blocks and returns
//! a freshly computed value — no I/O, no shared state, safe to call
//! concurrently.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `ScheduleBlock`,
//!   `ConsolidatedRange`
//! - **`time`**: `HH:MM` ↔ minute-of-day arithmetic and the interval
//!   overlap predicate
//! - **`conflict`**: Pairwise overlap scanning across a schedule
//! - **`validation`**: Business-rule checks for a candidate block
//!   before insertion
//! - **`consolidate`**: Merging contiguous blocks into displayable
//!   ranges
//! - **`summary`**: Weekly hour totals, class-day listing, and text
//!   summaries
//!
//! # Error Model
//!
//! Business-rule violations (bad duration, overlap) come back as
//! values — a `ValidationError` or entries in a `ConflictReport` —
//! never as panics. Malformed `HH:MM` text or an unknown day label is
//! a caller contract violation and fails fast with a typed parse
//! error.

pub mod conflict;
pub mod consolidate;
pub mod models;
pub mod summary;
pub mod time;
pub mod validation;
