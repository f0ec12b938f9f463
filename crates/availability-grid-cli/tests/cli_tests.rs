//! Integration tests for the `avail` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise each subcommand
//! through the actual binary, including stdin/stdout piping, file I/O, and
//! error reporting for malformed availability.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn avail() -> Command {
    Command::cargo_bin("avail").unwrap()
}

/// Run `avail` with `args` and parse stdout as JSON.
fn run_json(args: &[&str], stdin: Option<&str>) -> Value {
    let mut cmd = avail();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().expect("avail should run");
    assert!(
        output.status.success(),
        "avail {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Compact subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compact_stdin_to_stdout() {
    let out = run_json(
        &["compact"],
        Some(r#"[{"day":0,"slot":5},{"day":0,"slot":6}]"#),
    );

    assert_eq!(
        out,
        json!([{"day": "Monday", "start_time": "08:30", "end_time": "09:30"}])
    );
}

#[test]
fn compact_file_to_stdout() {
    let out = run_json(&["compact", "-i", fixture("cells.json").as_str()], None);

    assert_eq!(
        out,
        json!([
            {"day": "Wednesday", "start_time": "08:00", "end_time": "09:30"},
            {"day": "Sunday", "start_time": "23:30", "end_time": "24:00"}
        ])
    );
}

#[test]
fn compact_empty_list() {
    assert_eq!(run_json(&["compact"], Some("[]")), json!([]));
}

#[test]
fn compact_rejects_out_of_bounds_cell() {
    avail()
        .arg("compact")
        .write_stdin(r#"[{"day":7,"slot":0}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse cells JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Expand subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn expand_file_to_stdout() {
    let out = run_json(&["expand", "-i", fixture("availability.json").as_str()], None);
    let cells = out.as_array().unwrap();

    // 4 Monday + 3 Wednesday + 4 Saturday slots
    assert_eq!(cells.len(), 11);
    assert_eq!(cells[0], json!({"day": 0, "slot": 24}));
    assert_eq!(cells[10], json!({"day": 5, "slot": 35}));
}

#[test]
fn expand_file_to_file() {
    let out_path = std::env::temp_dir().join("avail-test-expand-output.json");
    let _ = std::fs::remove_file(&out_path);

    avail()
        .args(["expand", "-i", fixture("availability.json").as_str(), "-o"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 11);

    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn expand_then_compact_roundtrip() {
    let intervals = std::fs::read_to_string(fixture("availability.json")).unwrap();

    let cells = run_json(&["expand"], Some(&intervals));
    let back = run_json(&["compact"], Some(&cells.to_string()));

    let original: Value = serde_json::from_str(&intervals).unwrap();
    assert_eq!(back, original);
}

#[test]
fn expand_unknown_day_fails() {
    avail()
        .arg("expand")
        .write_stdin(r#"[{"day":"Funday","start_time":"08:00","end_time":"09:00"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid availability"))
        .stderr(predicate::str::contains("Funday"));
}

#[test]
fn expand_misaligned_time_fails() {
    avail()
        .arg("expand")
        .write_stdin(r#"[{"day":"Monday","start_time":"08:15","end_time":"09:00"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("08:15"));
}

#[test]
fn expand_invalid_json_fails() {
    avail()
        .arg("expand")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse availability JSON"));
}

#[test]
fn expand_missing_file_fails() {
    avail()
        .args(["expand", "-i", "/nonexistent/availability.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalize subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn normalize_sorts_and_merges() {
    let out = run_json(&["normalize", "-i", fixture("unsorted.json").as_str()], None);

    assert_eq!(
        out,
        json!([
            {"day": "Monday", "start_time": "08:00", "end_time": "10:00"},
            {"day": "Friday", "start_time": "09:00", "end_time": "11:00"}
        ])
    );
}

#[test]
fn normalize_canonical_input_is_unchanged() {
    let input = std::fs::read_to_string(fixture("availability.json")).unwrap();
    let out = run_json(&["normalize"], Some(&input));

    assert_eq!(out, serde_json::from_str::<Value>(&input).unwrap());
}

// ─────────────────────────────────────────────────────────────────────────────
// Grid subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn grid_renders_selected_slots() {
    let expected_wednesday = format!("Wednesday {}###{}", ".".repeat(4), ".".repeat(29));

    avail()
        .args(["grid", "-i", fixture("availability.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected_wednesday))
        .stdout(predicate::str::contains(format!("Sunday    {}", ".".repeat(36))));
}

#[test]
fn grid_summary_reports_total_and_first_slots() {
    avail()
        .args(["grid", "--summary", "-i", fixture("availability.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 5h30"))
        .stdout(predicate::str::contains("Monday    from 18:00"))
        .stdout(predicate::str::contains("Wednesday from 08:00"))
        .stdout(predicate::str::contains("Saturday  from 22:00"))
        .stdout(predicate::str::contains("Sunday    from").not());
}

#[test]
fn grid_without_summary_omits_totals() {
    avail()
        .args(["grid", "-i", fixture("availability.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:").not());
}

// ─────────────────────────────────────────────────────────────────────────────
// Preset subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn preset_on_empty_grid() {
    let out = run_json(&["preset", "--day", "Friday", "--part", "evening"], None);

    assert_eq!(
        out,
        json!([{"day": "Friday", "start_time": "17:00", "end_time": "21:00"}])
    );
}

#[test]
fn preset_merges_with_existing_schedule() {
    let out = run_json(
        &[
            "preset",
            "--day",
            "Monday",
            "--part",
            "evening",
            "-i",
            fixture("availability.json").as_str(),
        ],
        None,
    );

    assert_eq!(
        out[0],
        json!({"day": "Monday", "start_time": "17:00", "end_time": "21:00"})
    );
    assert_eq!(out.as_array().unwrap().len(), 3);
}

#[test]
fn preset_unknown_part_fails() {
    avail()
        .args(["preset", "--day", "Monday", "--part", "brunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown day part: brunch"));
}

// ─────────────────────────────────────────────────────────────────────────────
// CLI surface
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    avail()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compact"))
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn unknown_subcommand_fails() {
    avail()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = avail()
        .args(["-v", "compact"])
        .env_remove("RUST_LOG")
        .write_stdin(r#"[{"day":0,"slot":0}]"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout.as_array().unwrap().len(), 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("compact"));
}
