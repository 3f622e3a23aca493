//! Behavioral specs for verbosity and log sinks.
//!
//! Tests that scour correctly handles:
//! - the verbosity flag and its severity ladder
//! - console and file sink duplication
//! - failure reporting that survives any threshold
//!
//! Reference: docs/specs/03-logging.md

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// VERBOSITY SPECS
// =============================================================================

/// Spec: docs/specs/03-logging.md#severity-ladder
///
/// > With no -v flags only critical records pass, so a clean run is
/// > silent on stderr.
#[test]
fn clean_runs_are_silent_by_default() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .args(["foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr("");
}

/// Spec: docs/specs/03-logging.md#severity-ladder
///
/// > -vvvv admits informational records such as the end-of-run
/// > summary.
#[test]
fn four_flags_admit_the_run_summary() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .args(["-vvvv", "foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("scanned 1 of 1 source(s)"));
}

/// Spec: docs/specs/03-logging.md#severity-ladder
///
/// > -vvv stops at warnings; informational records stay filtered.
#[test]
fn three_flags_exclude_the_run_summary() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .args(["-vvv", "foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("scanned").not());
}

/// Spec: docs/specs/03-logging.md#severity-ladder
///
/// > Extra -v flags beyond the end of the ladder keep the most
/// > verbose setting rather than failing.
#[test]
fn extra_verbosity_flags_saturate() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .args(["-vvvvvvvv", "foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("scanning a.txt"));
}

/// Spec: docs/specs/03-logging.md#env-override
///
/// > RUST_LOG overrides the flag-derived threshold.
#[test]
fn rust_log_overrides_the_flags() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .env("RUST_LOG", "debug")
        .args(["foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("scanning a.txt"));
}

// =============================================================================
// SINK SPECS
// =============================================================================

/// Spec: docs/specs/03-logging.md#file-sink
///
/// > The log file receives the same records as the console.
#[test]
fn log_file_duplicates_console_records() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .args(["-vvvv", "--log-file", "run.log", "foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("scanned 1 of 1 source(s)"));

    let log = temp.read("run.log");
    assert!(log.contains("scanned 1 of 1 source(s)"));
}

/// Spec: docs/specs/03-logging.md#file-sink
///
/// > The log file is truncated at startup, never appended to.
#[test]
fn log_file_is_truncated_each_run() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");
    temp.file("run.log", "stale records from an earlier run\n");

    scour_cmd()
        .args(["--log-file", "run.log", "foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(temp.read("run.log"), "");
}

/// Spec: docs/specs/03-logging.md#file-sink
///
/// > An unopenable log file fails the run before any scanning.
#[test]
fn unopenable_log_file_is_fatal() {
    let temp = Project::empty();
    temp.file("sub/keep", "");
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .args(["--log-file", "sub", "foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("cannot open log file"));
}

/// Spec: docs/specs/01-cli.md#environment
///
/// > SCOUR_LOG_FILE names the log file when the flag is absent.
#[test]
fn log_file_env_var_is_honored() {
    let temp = Project::empty();
    temp.file("a.txt", "foo\n");

    scour_cmd()
        .env("SCOUR_LOG_FILE", "env.log")
        .args(["foo", "a.txt"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(temp.read("env.log"), "");
}

// =============================================================================
// FAILURE REPORTING SPECS
// =============================================================================

/// Spec: docs/specs/03-logging.md#failure-reporting
///
/// > Source failures are reported even at the quietest setting.
#[test]
fn source_failures_pass_the_default_threshold() {
    let temp = Project::empty();
    temp.file("good.txt", "foo\n");

    scour_cmd()
        .args(["foo", "missing.txt", "good.txt"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("missing.txt"));
}

/// Spec: docs/specs/03-logging.md#failure-reporting
///
/// > Failure records reach the file sink as well as the console.
#[test]
fn source_failures_reach_the_log_file() {
    let temp = Project::empty();
    temp.file("good.txt", "foo\n");

    scour_cmd()
        .args(["--log-file", "run.log", "foo", "missing.txt", "good.txt"])
        .current_dir(temp.path())
        .assert()
        .code(2);

    assert!(temp.read("run.log").contains("missing.txt"));
}
