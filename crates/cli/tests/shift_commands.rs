// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for the shift commands
//!
//! These tests verify `rota check`, `count`, `list` and `validate` against
//! shift files written to a temporary directory.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{rota, setup_test_env, write_file, BIWEEKLY_TOML, ONCE_JSON};
use predicates::prelude::*;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_count_biweekly_shift() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    rota(temp.path())
        .args(["count", "shift.toml"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_check_reports_match_and_no_match() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    rota(temp.path())
        .args(["check", "shift.toml", "2021-01-18"])
        .assert()
        .success()
        .stdout("match\n");

    // Off week for the biweekly cycle
    rota(temp.path())
        .args(["check", "shift.toml", "2021-01-11T08:30"])
        .assert()
        .success()
        .stdout("no match\n");

    // Past the end of the window
    rota(temp.path())
        .args(["check", "shift.toml", "2021-03-15"])
        .assert()
        .success()
        .stdout("no match\n");
}

#[test]
fn test_check_rejects_malformed_date() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    rota(temp.path())
        .args(["check", "shift.toml", "next tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn test_list_prints_dates_in_order() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    let output = rota(temp.path())
        .args(["list", "shift.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    similar_asserts::assert_eq!(
        stdout_of(&output).as_str(),
        "2021-01-04\n2021-01-07\n2021-01-18\n2021-01-21\n2021-02-01\n\
         2021-02-04\n2021-02-15\n2021-02-18\n2021-03-01\n"
    );
}

#[test]
fn test_list_from_and_limit() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    let output = rota(temp.path())
        .args(["list", "shift.toml", "--from", "2021-02-02", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    similar_asserts::assert_eq!(stdout_of(&output).as_str(), "2021-02-04\n2021-02-15\n");
}

#[test]
fn test_list_limit_from_config_file() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);
    write_file(temp.path(), "rota.toml", "list_limit = 3\n");

    let output = rota(temp.path())
        .args(["list", "shift.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    similar_asserts::assert_eq!(stdout_of(&output).as_str(), "2021-01-04\n2021-01-07\n2021-01-18\n");
}

#[test]
fn test_config_from_environment() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);
    let config = write_file(temp.path(), "custom.toml", "format = \"json\"\n");

    let output = rota(temp.path())
        .env("ROTA_CONFIG", &config)
        .args(["count", "shift.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["occurrences"], 9);
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    rota(temp.path())
        .args(["--config", "absent.toml", "count", "shift.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_unknown_config_key_fails() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);
    write_file(temp.path(), "rota.toml", "colour = true\n");

    rota(temp.path())
        .args(["count", "shift.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_json_format() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    let output = rota(temp.path())
        .args(["--format", "json", "check", "shift.toml", "2021-01-07"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["date"], "2021-01-07");
    assert_eq!(value["matches"], true);

    let output = rota(temp.path())
        .args(["list", "shift.toml", "--limit", "2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "count": 2, "dates": ["2021-01-04", "2021-01-07"] })
    );
}

#[test]
fn test_list_past_window_end_is_empty() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    rota(temp.path())
        .args(["list", "shift.toml", "--from", "2021-03-02"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no occurrences"));

    let output = rota(temp.path())
        .args(["--format", "json", "list", "shift.toml", "--from", "2021-03-02"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "count": 0, "dates": [] }));
}

#[test]
fn test_one_off_json_shift() {
    let temp = setup_test_env();
    write_file(temp.path(), "once.json", ONCE_JSON);

    rota(temp.path())
        .args(["count", "once.json"])
        .assert()
        .success()
        .stdout("1\n");

    rota(temp.path())
        .args(["check", "once.json", "2021-06-01"])
        .assert()
        .success()
        .stdout("match\n");

    rota(temp.path())
        .args(["check", "once.json", "2021-06-02"])
        .assert()
        .success()
        .stdout("no match\n");
}

#[test]
fn test_validate_summarizes_shift() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    rota(temp.path())
        .args(["validate", "shift.toml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok: every 2 weeks on monday,thursday"))
        .stdout(predicate::str::contains("(9 occurrences)"));
}

#[test]
fn test_validate_json_normalizes_record() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.toml", BIWEEKLY_TOML);

    let output = rota(temp.path())
        .args(["--format", "json", "validate", "shift.toml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["occurrences"], 9);
    assert_eq!(value["shift"]["start_date"], "2021-01-01T00:00:00");
    assert_eq!(value["shift"]["recurrence"]["repeat_interval_type"], "Weekly");
    assert_eq!(value["shift"]["recurrence"]["thursday"], true);
}

#[test]
fn test_unsupported_recurrence_type_fails_with_suggestion() {
    let temp = setup_test_env();
    write_file(
        temp.path(),
        "monthly.toml",
        "start_date = \"2021-01-01\"\nend_date = \"2021-06-01\"\n\n\
         [recurrence]\nrepeat_interval_type = \"Monthly\"\ninterval_amount = 1\n",
    );

    rota(temp.path())
        .args(["count", "monthly.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported recurrence type: Monthly"))
        .stderr(predicate::str::contains("\"Daily\" or \"Weekly\""));
}

#[test]
fn test_inverted_range_fails() {
    let temp = setup_test_env();
    write_file(
        temp.path(),
        "backwards.toml",
        "start_date = \"2021-02-01\"\nend_date = \"2021-01-01\"\n",
    );

    rota(temp.path())
        .args(["count", "backwards.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shift ends before it starts"));
}

#[test]
fn test_unsupported_file_extension() {
    let temp = setup_test_env();
    write_file(temp.path(), "shift.yaml", "start_date: 2021-01-01\n");

    rota(temp.path())
        .args(["count", "shift.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shift file format"))
        .stderr(predicate::str::contains(".toml or .json"));
}

#[test]
fn test_missing_shift_file() {
    let temp = setup_test_env();

    rota(temp.path())
        .args(["count", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read shift file"));
}

#[test]
fn test_help_lists_commands() {
    let temp = setup_test_env();

    rota(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("count"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("validate"));
}
