// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for recurrence rules and shifts

use crate::recurrence::IntervalType;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised while building or validating a shift definition
///
/// These are configuration errors. Matching and counting never fail once a
/// [`Shift`](crate::Shift) or [`RecurrenceRule`](crate::RecurrenceRule) exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("unsupported recurrence type: {0}")]
    UnsupportedIntervalType(String),
    #[error("{interval_type} recurrence needs a positive interval amount, got {amount}")]
    NonPositiveInterval {
        interval_type: IntervalType,
        amount: i64,
    },
    #[error("{interval_type} recurrence interval amount {amount} is too large")]
    IntervalTooLarge {
        interval_type: IntervalType,
        amount: i64,
    },
    #[error("shift ends before it starts: {end} is earlier than {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl ShiftError {
    /// True for errors caused by the recurrence rule rather than the date range
    pub fn is_invalid_recurrence(&self) -> bool {
        !matches!(self, ShiftError::InvalidRange { .. })
    }
}
