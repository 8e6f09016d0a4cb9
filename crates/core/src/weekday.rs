// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weekday alignment helpers and weekday flag sets
//!
//! Weekdays are indexed Monday=0 through Sunday=6, matching
//! [`Weekday::num_days_from_monday`].

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use std::fmt;
use std::ops::{Add, Sub};

/// All weekdays in index order
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Lowercase full name of a weekday, as used in persisted records
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Earliest date at or after `reference` that falls on `target`.
///
/// A reference already on `target` is returned unchanged. Works for both
/// dates and date-times; time of day is carried through.
///
/// # Panics
///
/// Panics when the result lies past chrono's last date. The engine uses
/// [`checked_next_occurrence_of_weekday`].
pub fn next_occurrence_of_weekday<D>(reference: D, target: Weekday) -> D
where
    D: Datelike + Add<Days, Output = D>,
{
    let offset = days_ahead(reference.weekday(), target);
    reference + offset
}

/// Like [`next_occurrence_of_weekday`], `None` past chrono's last date
pub fn checked_next_occurrence_of_weekday(
    reference: NaiveDate,
    target: Weekday,
) -> Option<NaiveDate> {
    reference.checked_add_days(days_ahead(reference.weekday(), target))
}

/// Latest date at or before `reference` that falls on `target`.
///
/// Dual of [`next_occurrence_of_weekday`]; same-weekday is a fixed point.
///
/// # Panics
///
/// Panics when the result lies before chrono's first date.
pub fn prev_occurrence_of_weekday<D>(reference: D, target: Weekday) -> D
where
    D: Datelike + Sub<Days, Output = D>,
{
    let offset = days_behind(reference.weekday(), target);
    reference - offset
}

/// Like [`prev_occurrence_of_weekday`], `None` before chrono's first date
pub fn checked_prev_occurrence_of_weekday(
    reference: NaiveDate,
    target: Weekday,
) -> Option<NaiveDate> {
    reference.checked_sub_days(days_behind(reference.weekday(), target))
}

fn days_ahead(current: Weekday, target: Weekday) -> Days {
    let ahead = (target.num_days_from_monday() + 7 - current.num_days_from_monday()) % 7;
    Days::new(u64::from(ahead))
}

fn days_behind(current: Weekday, target: Weekday) -> Days {
    let behind = (current.num_days_from_monday() + 7 - target.num_days_from_monday()) % 7;
    Days::new(u64::from(behind))
}

/// Signed number of calendar days from `from` to `to`, ignoring time of day
pub(crate) fn calendar_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    date_days_between(from.date(), to.date())
}

pub(crate) fn date_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// A set of weekday flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b111_1111);

    pub fn single(day: Weekday) -> Self {
        Self(Self::bit(day))
    }

    /// Add a weekday, returning true if it was not already present
    pub fn insert(&mut self, day: Weekday) -> bool {
        let added = !self.contains(day);
        self.0 |= Self::bit(day);
        added
    }

    pub fn with(mut self, day: Weekday) -> Self {
        self.insert(day);
        self
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Weekdays in the set, Monday first
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEKDAYS.into_iter().filter(move |day| self.contains(*day))
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_monday()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, WeekdaySet::with)
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(weekday_name).collect();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
#[path = "weekday_tests.rs"]
mod tests;
