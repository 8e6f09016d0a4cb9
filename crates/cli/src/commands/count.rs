// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Count the occurrences of a shift

use super::load_shift;
use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct CountArgs {
    /// Shift definition file (.toml or .json)
    pub shift: PathBuf,
}

#[derive(Serialize)]
struct CountResult {
    occurrences: u64,
}

impl fmt::Display for CountResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.occurrences)
    }
}

pub fn run(args: CountArgs, format: OutputFormat) -> anyhow::Result<()> {
    let shift = load_shift(&args.shift)?;
    let result = CountResult {
        occurrences: shift.count_days(),
    };
    output::print(&result, format);
    Ok(())
}
