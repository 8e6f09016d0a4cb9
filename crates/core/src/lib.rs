// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rota-core: shift recurrence matching and occurrence counting
//!
//! This crate provides:
//! - Weekday alignment helpers and weekday flag sets
//! - Recurrence rules (none, daily, weekly) and the occurrence predicate
//! - Shifts: windowed recurrences with closed-form occurrence counts
//! - The persisted record shape and its validation
//!
//! Everything here is pure: no I/O, no shared state.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod error;
pub mod record;
pub mod recurrence;
pub mod shift;
pub mod weekday;

// Re-exports
pub use error::ShiftError;
pub use record::{parse_date_or_datetime, RecordError, RecurrenceRecord, ShiftRecord};
pub use recurrence::{matches_recurrence, IntervalType, RecurrenceRule};
pub use shift::{count_shift_days, matches_shift, Occurrences, Shift};
pub use weekday::{
    checked_next_occurrence_of_weekday, checked_prev_occurrence_of_weekday,
    next_occurrence_of_weekday, prev_occurrence_of_weekday, weekday_name, WeekdaySet, WEEKDAYS,
};
