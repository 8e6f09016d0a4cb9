// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Biweekly Monday/Thursday shift over the first two months of 2021.
pub const BIWEEKLY_TOML: &str = r#"
start_date = "2021-01-01"
end_date = "2021-03-01"

[recurrence]
repeat_interval_type = "Weekly"
interval_amount = 2
monday = true
thursday = true
"#;

/// One-off shift stored as JSON.
pub const ONCE_JSON: &str = r#"{
    "start_date": "2021-06-01T09:00:00",
    "end_date": "2021-06-30T00:00:00",
    "recurrence": { "repeat_interval_type": null, "interval_amount": 0 }
}"#;

pub fn setup_test_env() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file into the test directory and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// A `rota` invocation isolated from the caller's config and log settings.
pub fn rota(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rota").expect("rota binary");
    cmd.current_dir(dir)
        .env_remove("ROTA_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
