// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validate a shift definition and summarize it

use super::load_shift;
use crate::output::{self, OutputFormat};
use clap::Args;
use rota_core::ShiftRecord;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    /// Shift definition file (.toml or .json)
    pub shift: PathBuf,
}

#[derive(Serialize)]
struct ValidateResult {
    summary: String,
    occurrences: u64,
    /// Normalized persisted form
    shift: ShiftRecord,
}

impl fmt::Display for ValidateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ok: {} ({} occurrences)", self.summary, self.occurrences)
    }
}

pub fn run(args: ValidateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let shift = load_shift(&args.shift)?;
    let result = ValidateResult {
        summary: shift.to_string(),
        occurrences: shift.count_days(),
        shift: ShiftRecord::from(&shift),
    };
    output::print(&result, format);
    Ok(())
}
