// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check whether a date is an occurrence of a shift

use super::{load_shift, parse_date_arg};
use crate::output::{self, OutputFormat};
use chrono::NaiveDateTime;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Shift definition file (.toml or .json)
    pub shift: PathBuf,
    /// Date to check (YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])
    #[arg(value_parser = parse_date_arg)]
    pub date: NaiveDateTime,
}

#[derive(Serialize)]
struct CheckResult {
    date: String,
    matches: bool,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches {
            write!(f, "match")
        } else {
            write!(f, "no match")
        }
    }
}

pub fn run(args: CheckArgs, format: OutputFormat) -> anyhow::Result<()> {
    let shift = load_shift(&args.shift)?;
    let result = CheckResult {
        date: args.date.format(output::DATE_FORMAT).to_string(),
        matches: shift.matches(args.date),
    };
    output::print(&result, format);
    Ok(())
}
