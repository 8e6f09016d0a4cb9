// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recurrence rules and the occurrence predicate
//!
//! A rule is anchored at a start date-time. Occurrences are whole calendar
//! dates: time of day only matters for the anchor itself, never for the
//! periodic arithmetic.

use crate::error::ShiftError;
use crate::weekday::{
    calendar_days_between, checked_next_occurrence_of_weekday, date_days_between, WeekdaySet,
};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use std::fmt;
use std::num::NonZeroU32;

/// Kind of repetition a rule describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalType {
    /// Single occurrence on the anchor date
    None,
    Daily,
    Weekly,
}

impl IntervalType {
    /// Parse the persisted discriminator, where a missing value means no repetition
    pub fn from_persisted(value: Option<&str>) -> Result<Self, ShiftError> {
        match value {
            None => Ok(IntervalType::None),
            Some("Daily") => Ok(IntervalType::Daily),
            Some("Weekly") => Ok(IntervalType::Weekly),
            Some(other) => Err(ShiftError::UnsupportedIntervalType(other.to_string())),
        }
    }

    /// The persisted discriminator for this type
    pub fn to_persisted(self) -> Option<&'static str> {
        match self {
            IntervalType::None => None,
            IntervalType::Daily => Some("Daily"),
            IntervalType::Weekly => Some("Weekly"),
        }
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalType::None => write!(f, "None"),
            IntervalType::Daily => write!(f, "Daily"),
            IntervalType::Weekly => write!(f, "Weekly"),
        }
    }
}

/// A repeating pattern of occurrence dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    /// Occurs once, on the anchor date
    None,
    /// Occurs every `every` days starting at the anchor
    Daily { every: NonZeroU32 },
    /// Occurs every `every` weeks on each of `weekdays`
    Weekly {
        every: NonZeroU32,
        weekdays: WeekdaySet,
    },
}

impl RecurrenceRule {
    /// Every `every` days. Zero is rejected.
    pub fn daily(every: u32) -> Result<Self, ShiftError> {
        let every = interval(IntervalType::Daily, i64::from(every))?;
        Ok(RecurrenceRule::Daily { every })
    }

    /// Every `every` weeks on the given weekdays. Zero is rejected.
    ///
    /// An empty weekday set is allowed and never produces an occurrence.
    pub fn weekly(every: u32, weekdays: WeekdaySet) -> Result<Self, ShiftError> {
        let every = interval(IntervalType::Weekly, i64::from(every))?;
        Ok(RecurrenceRule::Weekly { every, weekdays })
    }

    pub fn interval_type(&self) -> IntervalType {
        match self {
            RecurrenceRule::None => IntervalType::None,
            RecurrenceRule::Daily { .. } => IntervalType::Daily,
            RecurrenceRule::Weekly { .. } => IntervalType::Weekly,
        }
    }

    /// Interval amount, absent for non-repeating rules
    pub fn interval_amount(&self) -> Option<u32> {
        match self {
            RecurrenceRule::None => None,
            RecurrenceRule::Daily { every } | RecurrenceRule::Weekly { every, .. } => {
                Some(every.get())
            }
        }
    }

    /// Active weekdays; empty for anything but weekly rules
    pub fn weekdays(&self) -> WeekdaySet {
        match self {
            RecurrenceRule::Weekly { weekdays, .. } => *weekdays,
            _ => WeekdaySet::EMPTY,
        }
    }

    /// Earliest occurrence date on or after `from` for a rule anchored at `anchor`
    ///
    /// Computed directly from the interval arithmetic, without scanning dates.
    /// Returns `None` when no such date exists (or it is out of chrono's range).
    pub fn next_occurrence(&self, anchor: NaiveDateTime, from: NaiveDate) -> Option<NaiveDate> {
        let anchor = anchor.date();
        match *self {
            RecurrenceRule::None => (from <= anchor).then_some(anchor),
            RecurrenceRule::Daily { every } => {
                let offset = date_days_between(anchor, from);
                aligned_at_or_after(anchor, offset, 1, every)
            }
            RecurrenceRule::Weekly { every, weekdays } => weekdays
                .iter()
                .filter_map(|day| {
                    let first = checked_next_occurrence_of_weekday(anchor, day)?;
                    let offset = date_days_between(first, from);
                    aligned_at_or_after(first, offset, 7, every)
                })
                .min(),
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::None => write!(f, "once"),
            RecurrenceRule::Daily { every } if every.get() == 1 => write!(f, "every day"),
            RecurrenceRule::Daily { every } => write!(f, "every {} days", every),
            RecurrenceRule::Weekly { every, weekdays } if every.get() == 1 => {
                write!(f, "every week on {}", weekdays)
            }
            RecurrenceRule::Weekly { every, weekdays } => {
                write!(f, "every {} weeks on {}", every, weekdays)
            }
        }
    }
}

/// Validate an interval amount for a repeating rule
pub(crate) fn interval(interval_type: IntervalType, amount: i64) -> Result<NonZeroU32, ShiftError> {
    if amount <= 0 {
        return Err(ShiftError::NonPositiveInterval {
            interval_type,
            amount,
        });
    }
    u32::try_from(amount)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ShiftError::IntervalTooLarge {
            interval_type,
            amount,
        })
}

/// First date `first + k * unit * every` (k >= 0) lying `offset` or more days after `first`
fn aligned_at_or_after(
    first: NaiveDate,
    offset: i64,
    unit: i64,
    every: NonZeroU32,
) -> Option<NaiveDate> {
    if offset <= 0 {
        return Some(first);
    }
    let step = unit * i64::from(every.get());
    let steps = (offset + step - 1) / step;
    let days = u64::try_from(steps.checked_mul(step)?).ok()?;
    first.checked_add_days(Days::new(days))
}

/// Whole weeks between two dates on the same weekday
fn whole_weeks(days: i64) -> i64 {
    // Both ends share a weekday, so `days` is a multiple of 7 and the
    // division is exact; the +3 only keeps nearest-week semantics
    (days + 3) / 7
}

/// Whether `candidate` is an occurrence of `rule` anchored at `start`
///
/// Dates before the anchor never match. Callers checking a shift should go
/// through [`matches_shift`](crate::matches_shift), which also enforces the
/// end of the window.
pub fn matches_recurrence(
    candidate: NaiveDateTime,
    rule: &RecurrenceRule,
    start: NaiveDateTime,
) -> bool {
    match *rule {
        RecurrenceRule::None => candidate.date() == start.date(),
        RecurrenceRule::Daily { every } => {
            let delta = calendar_days_between(start, candidate);
            delta >= 0 && delta % i64::from(every.get()) == 0
        }
        RecurrenceRule::Weekly { every, weekdays } => {
            let day = candidate.weekday();
            if !weekdays.contains(day) {
                return false;
            }
            let Some(first) = checked_next_occurrence_of_weekday(start.date(), day) else {
                return false;
            };
            let delta = date_days_between(first, candidate.date());
            delta >= 0 && whole_weeks(delta) % i64::from(every.get()) == 0
        }
    }
}

#[cfg(test)]
#[path = "recurrence_tests.rs"]
mod tests;
