//! Integration tests for CLI surface: help, version, metrics listing, exit codes.

mod common;

use common::{MISMATCHED_KEYS, SAMPLE_DATASET, TestFixture};
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    perf_charts!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("metrics"))
        .stdout(predicate::str::contains("charts"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn version_flag() {
    perf_charts!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("perf-charts"));
}

#[test]
fn metrics_lists_discovered_names() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args(["metrics", "results.json", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available metrics:"))
        .stdout(predicate::str::contains("averageDuration"))
        .stdout(predicate::str::contains("throughput"))
        .stdout(predicate::str::contains("peakMemoryUsage"));
}

#[test]
fn metrics_quiet_prints_bare_names() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args(["metrics", "results.json", "--no-config", "-q"])
        .assert()
        .success()
        .stdout("averageDuration\npeakMemoryUsage\nthroughput\n");
}

#[test]
fn missing_input_exits_with_input_error() {
    let fixture = TestFixture::new();

    perf_charts!()
        .current_dir(fixture.path())
        .args(["metrics", "absent.json", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error: Failed to read file"));
}

#[test]
fn malformed_json_exits_with_input_error() {
    let fixture = TestFixture::new();
    fixture.create_dataset("{not json");

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn schema_error_names_suite_and_index() {
    let fixture = TestFixture::new();
    fixture.create_dataset(MISMATCHED_KEYS);

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("suite 'b' at index 2"));

    assert!(!fixture.path().join("charts").exists());
}

#[test]
fn empty_dataset_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_dataset("{}");

    perf_charts!()
        .current_dir(fixture.path())
        .args(["stats", "results.json", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Dataset is empty"));
}

#[test]
fn non_object_root_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_dataset("[1, 2, 3]");

    perf_charts!()
        .current_dir(fixture.path())
        .args(["metrics", "results.json", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Schema error"));
}

#[test]
fn unknown_subcommand_fails() {
    perf_charts!().arg("plot").assert().failure();
}
