// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use rota_core::{RecordError, ShiftError};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct RotaError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RotaError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for RotaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for RotaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for shift file failures.
impl RotaError {
    /// Error for when a shift file cannot be read.
    pub fn shift_file_unreadable(path: &Path, source: std::io::Error) -> Self {
        RotaError::new(format!("Failed to read shift file '{}'", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Check that the path exists and is readable")
            .with_source(source)
    }

    /// Error for shift files that are neither TOML nor JSON.
    pub fn unsupported_shift_format(path: &Path) -> Self {
        RotaError::new(format!(
            "Unsupported shift file format '{}'",
            path.display()
        ))
        .with_context("Shift files are read as TOML or JSON based on their extension")
        .with_suggestion("Rename the file with a .toml or .json extension")
    }

    /// Error for shift files that decode but do not describe a valid shift.
    pub fn invalid_shift(path: &Path, source: RecordError) -> Self {
        let err = RotaError::new(format!("Invalid shift definition in '{}'", path.display()))
            .with_context(source.to_string());
        let err = match &source {
            RecordError::Toml(_) | RecordError::Json(_) => err.with_suggestion(
                "Dates are strings: \"YYYY-MM-DD\" or \"YYYY-MM-DDTHH:MM:SS\"",
            ),
            RecordError::Shift(ShiftError::InvalidRange { .. }) => {
                err.with_suggestion("Set end_date on or after start_date")
            }
            RecordError::Shift(ShiftError::UnsupportedIntervalType(_)) => err.with_suggestion(
                "Use repeat_interval_type \"Daily\" or \"Weekly\", or omit it for a one-off shift",
            ),
            RecordError::Shift(_) => {
                err.with_suggestion("Set interval_amount to a positive whole number")
            }
        };
        err.with_source(source)
    }
}
