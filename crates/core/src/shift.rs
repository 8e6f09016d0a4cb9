// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shifts: a recurrence bound to an active date window
//!
//! Provides the shift-level predicate, the closed-form occurrence count and
//! a lazy iterator over occurrence dates.

use crate::error::ShiftError;
use crate::recurrence::{matches_recurrence, RecurrenceRule};
use crate::weekday::{
    calendar_days_between, checked_next_occurrence_of_weekday,
    checked_prev_occurrence_of_weekday, date_days_between, weekday_name,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;

/// An activity window bound to a recurrence rule
///
/// The window is inclusive on both ends and compared on calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift {
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    recurrence: RecurrenceRule,
}

impl Shift {
    /// Create a shift, rejecting windows that end before they start
    pub fn new(
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        recurrence: RecurrenceRule,
    ) -> Result<Self, ShiftError> {
        if end_date < start_date {
            return Err(ShiftError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
            recurrence,
        })
    }

    /// Anchor of the recurrence and first possible occurrence
    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    /// Last possible occurrence (inclusive)
    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    pub fn recurrence(&self) -> &RecurrenceRule {
        &self.recurrence
    }

    /// Whether `candidate` falls on a calendar date inside the window
    pub fn contains(&self, candidate: NaiveDateTime) -> bool {
        let day = candidate.date();
        self.start_date.date() <= day && day <= self.end_date.date()
    }

    pub fn matches(&self, candidate: NaiveDateTime) -> bool {
        matches_shift(candidate, self)
    }

    pub fn count_days(&self) -> u64 {
        count_shift_days(self)
    }

    /// Earliest occurrence on or after `from`, if one remains in the window
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        let from = from.max(self.start_date.date());
        self.recurrence
            .next_occurrence(self.start_date, from)
            .filter(|date| *date <= self.end_date.date())
    }

    /// All occurrence dates in the window, in ascending order
    pub fn occurrences(&self) -> Occurrences {
        self.occurrences_from(self.start_date.date())
    }

    /// Occurrence dates on or after `from`, in ascending order
    pub fn occurrences_from(&self, from: NaiveDate) -> Occurrences {
        Occurrences {
            shift: *self,
            next: self.next_occurrence(from),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} to {}",
            self.recurrence,
            self.start_date.format("%Y-%m-%d %H:%M"),
            self.end_date.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Lazy iterator over a shift's occurrence dates
#[derive(Debug, Clone)]
pub struct Occurrences {
    shift: Shift,
    next: Option<NaiveDate>,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .succ_opt()
            .and_then(|following| self.shift.next_occurrence(following));
        Some(current)
    }
}

impl FusedIterator for Occurrences {}

/// Whether `candidate` is an occurrence of `shift`
///
/// The window is checked first; the recurrence is never consulted for dates
/// outside it.
pub fn matches_shift(candidate: NaiveDateTime, shift: &Shift) -> bool {
    shift.contains(candidate)
        && matches_recurrence(candidate, &shift.recurrence, shift.start_date)
}

/// Number of occurrence dates in the shift window, computed without enumeration
pub fn count_shift_days(shift: &Shift) -> u64 {
    let start = shift.start_date.date();
    let end = shift.end_date.date();

    match shift.recurrence {
        RecurrenceRule::None => 1,
        RecurrenceRule::Daily { every } => {
            let span = calendar_days_between(shift.start_date, shift.end_date).unsigned_abs();
            span / u64::from(every.get()) + 1
        }
        RecurrenceRule::Weekly { every, weekdays } => weekdays
            .iter()
            .map(|day| {
                let first = checked_next_occurrence_of_weekday(start, day);
                let last = checked_prev_occurrence_of_weekday(end, day);
                // Windows shorter than a week, or pinned to the edge of the
                // calendar, can miss a weekday entirely
                let count = match (first, last) {
                    (Some(first), Some(last)) if first <= last => {
                        let week_span = date_days_between(first, last).unsigned_abs() / 7;
                        week_span / u64::from(every.get()) + 1
                    }
                    _ => 0,
                };
                trace!(weekday = weekday_name(day), count, "weekday occurrences");
                count
            })
            .sum(),
    }
}

#[cfg(test)]
#[path = "shift_tests.rs"]
mod tests;
