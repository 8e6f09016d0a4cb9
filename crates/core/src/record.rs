// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted shift definitions
//!
//! Shift definitions are stored as flat records: a nullable interval type,
//! an interval amount and seven weekday flags. Records are validated into a
//! [`Shift`] before any matching or counting happens.

use crate::error::ShiftError;
use crate::recurrence::{interval, matches_recurrence, IntervalType, RecurrenceRule};
use crate::shift::{count_shift_days, matches_shift, Shift};
use crate::weekday::WeekdaySet;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while decoding a persisted shift
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid shift: {0}")]
    Shift(#[from] ShiftError),
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS[.fff]`
///
/// A bare date means midnight.
pub fn parse_date_or_datetime(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let raw = raw.trim();
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Ok(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(datetime);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
}

mod flexible_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_or_datetime(&raw)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}

/// Stored form of a recurrence rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRecord {
    /// `"Daily"`, `"Weekly"`, or null for a single occurrence
    #[serde(default)]
    pub repeat_interval_type: Option<String>,
    /// Ignored when the interval type is null
    #[serde(default)]
    pub interval_amount: i64,
    #[serde(default)]
    pub monday: bool,
    #[serde(default)]
    pub tuesday: bool,
    #[serde(default)]
    pub wednesday: bool,
    #[serde(default)]
    pub thursday: bool,
    #[serde(default)]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub sunday: bool,
}

impl RecurrenceRecord {
    /// Weekdays whose flag is set
    pub fn weekdays(&self) -> WeekdaySet {
        let flags = [
            (Weekday::Mon, self.monday),
            (Weekday::Tue, self.tuesday),
            (Weekday::Wed, self.wednesday),
            (Weekday::Thu, self.thursday),
            (Weekday::Fri, self.friday),
            (Weekday::Sat, self.saturday),
            (Weekday::Sun, self.sunday),
        ];
        flags
            .into_iter()
            .filter(|(_, active)| *active)
            .map(|(day, _)| day)
            .collect()
    }

    fn set_weekdays(&mut self, weekdays: WeekdaySet) {
        self.monday = weekdays.contains(Weekday::Mon);
        self.tuesday = weekdays.contains(Weekday::Tue);
        self.wednesday = weekdays.contains(Weekday::Wed);
        self.thursday = weekdays.contains(Weekday::Thu);
        self.friday = weekdays.contains(Weekday::Fri);
        self.saturday = weekdays.contains(Weekday::Sat);
        self.sunday = weekdays.contains(Weekday::Sun);
    }

    pub fn to_rule(&self) -> Result<RecurrenceRule, ShiftError> {
        RecurrenceRule::try_from(self)
    }

    /// Validate the record, then test `candidate` against it
    pub fn matches(&self, candidate: NaiveDateTime, start: NaiveDateTime) -> Result<bool, ShiftError> {
        let rule = self.to_rule()?;
        Ok(matches_recurrence(candidate, &rule, start))
    }
}

impl TryFrom<&RecurrenceRecord> for RecurrenceRule {
    type Error = ShiftError;

    fn try_from(record: &RecurrenceRecord) -> Result<Self, Self::Error> {
        let interval_type = IntervalType::from_persisted(record.repeat_interval_type.as_deref());
        let rule = interval_type.and_then(|interval_type| match interval_type {
            IntervalType::None => Ok(RecurrenceRule::None),
            IntervalType::Daily => Ok(RecurrenceRule::Daily {
                every: interval(interval_type, record.interval_amount)?,
            }),
            IntervalType::Weekly => Ok(RecurrenceRule::Weekly {
                every: interval(interval_type, record.interval_amount)?,
                weekdays: record.weekdays(),
            }),
        });
        if let Err(e) = &rule {
            debug!(error = %e, "rejected recurrence record");
        }
        rule
    }
}

impl From<&RecurrenceRule> for RecurrenceRecord {
    fn from(rule: &RecurrenceRule) -> Self {
        let mut record = RecurrenceRecord {
            repeat_interval_type: rule.interval_type().to_persisted().map(str::to_string),
            interval_amount: rule.interval_amount().map_or(0, i64::from),
            ..RecurrenceRecord::default()
        };
        record.set_weekdays(rule.weekdays());
        record
    }
}

/// Stored form of a shift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    #[serde(with = "flexible_datetime")]
    pub start_date: NaiveDateTime,
    #[serde(with = "flexible_datetime")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub recurrence: RecurrenceRecord,
}

impl ShiftRecord {
    pub fn from_toml_str(content: &str) -> Result<Self, RecordError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_shift(&self) -> Result<Shift, ShiftError> {
        Shift::try_from(self)
    }

    /// Validate the record, then test `candidate` against the shift
    pub fn matches(&self, candidate: NaiveDateTime) -> Result<bool, ShiftError> {
        let shift = self.to_shift()?;
        Ok(matches_shift(candidate, &shift))
    }

    /// Validate the record, then count its occurrences
    pub fn count_days(&self) -> Result<u64, ShiftError> {
        let shift = self.to_shift()?;
        Ok(count_shift_days(&shift))
    }
}

impl TryFrom<&ShiftRecord> for Shift {
    type Error = ShiftError;

    fn try_from(record: &ShiftRecord) -> Result<Self, Self::Error> {
        let rule = RecurrenceRule::try_from(&record.recurrence)?;
        Shift::new(record.start_date, record.end_date, rule)
    }
}

impl From<&Shift> for ShiftRecord {
    fn from(shift: &Shift) -> Self {
        ShiftRecord {
            start_date: shift.start_date(),
            end_date: shift.end_date(),
            recurrence: RecurrenceRecord::from(shift.recurrence()),
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
