// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod count;
pub mod list;
pub mod validate;

use crate::error::RotaError;
use chrono::NaiveDateTime;
use rota_core::{RecordError, Shift, ShiftRecord};
use std::path::Path;
use tracing::debug;

/// Read a shift definition from a `.toml` or `.json` file and validate it
pub fn load_shift(path: &Path) -> Result<Shift, RotaError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| RotaError::shift_file_unreadable(path, e))?;

    let record = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => ShiftRecord::from_toml_str(&content),
        Some("json") => ShiftRecord::from_json_str(&content),
        _ => return Err(RotaError::unsupported_shift_format(path)),
    }
    .map_err(|e| RotaError::invalid_shift(path, e))?;

    let shift = record
        .to_shift()
        .map_err(|e| RotaError::invalid_shift(path, RecordError::from(e)))?;
    debug!(path = %path.display(), %shift, "loaded shift");
    Ok(shift)
}

/// Clap value parser for date arguments
pub fn parse_date_arg(raw: &str) -> Result<NaiveDateTime, String> {
    rota_core::parse_date_or_datetime(raw)
        .map_err(|e| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS] ({})", e))
}
