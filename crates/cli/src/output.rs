// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Date format used for every date `rota` prints
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a command result in the specified format
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => print_json(value),
    }
}

#[derive(Serialize)]
struct DateList {
    count: usize,
    dates: Vec<String>,
}

/// Print occurrence dates, one per line in text or as `{count, dates}` in JSON
///
/// An empty text listing prints nothing to stdout and notes it on stderr.
pub fn print_dates(dates: &[NaiveDate], format: OutputFormat) {
    let formatted = dates.iter().map(|date| date.format(DATE_FORMAT).to_string());
    match format {
        OutputFormat::Text => {
            if dates.is_empty() {
                eprintln!("no occurrences");
            }
            for date in formatted {
                println!("{}", date);
            }
        }
        OutputFormat::Json => print_json(&DateList {
            count: dates.len(),
            dates: formatted.collect(),
        }),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "failed to encode output as JSON"),
    }
}
