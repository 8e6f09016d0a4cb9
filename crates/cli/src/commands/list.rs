// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List occurrence dates of a shift

use super::{load_shift, parse_date_arg};
use crate::output::{self, OutputFormat};
use chrono::NaiveDateTime;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// Shift definition file (.toml or .json)
    pub shift: PathBuf,
    /// Only list occurrences on or after this date
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Option<NaiveDateTime>,
    /// Maximum number of dates to print (defaults to list_limit from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(args: ListArgs, format: OutputFormat, default_limit: usize) -> anyhow::Result<()> {
    let shift = load_shift(&args.shift)?;
    let from = args
        .from
        .map_or_else(|| shift.start_date().date(), |from| from.date());
    let limit = args.limit.unwrap_or(default_limit);

    let dates: Vec<_> = shift.occurrences_from(from).take(limit).collect();
    tracing::debug!(listed = dates.len(), limit, "listed occurrences");
    output::print_dates(&dates, format);
    Ok(())
}
