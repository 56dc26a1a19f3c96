//! Integration tests for configuration discovery and overrides.

mod common;

use common::{SAMPLE_DATASET, TestFixture};
use predicates::prelude::*;

#[test]
fn local_config_limits_default_metrics() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);
    fixture.create_config("[charts]\ndefault_metric_count = 1\n");

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--chart-type", "bar"])
        .assert()
        .success();

    assert_eq!(fixture.list("charts"), vec!["averageDuration_bar.svg"]);
}

#[test]
fn no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);
    fixture.create_config("[charts]\ndefault_metric_count = 1\n");

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--chart-type", "bar", "--no-config"])
        .assert()
        .success();

    assert_eq!(fixture.list("charts").len(), 3);
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);
    fixture.create_file("conf/dark.toml", "[style]\ndark_mode = true\n");

    perf_charts!()
        .current_dir(fixture.path())
        .args([
            "charts",
            "results.json",
            "--config",
            "conf/dark.toml",
            "--chart-type",
            "pie",
            "--metrics",
            "throughput",
        ])
        .assert()
        .success();

    assert!(fixture.read("charts/throughput_pie.svg").contains("#222222"));
}

#[test]
fn unknown_config_key_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);
    fixture.create_config("[style]\nfont = \"serif\"\n");

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn invalid_dpi_in_config() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);
    fixture.create_config("[style]\ndpi = 5000\n");

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid style"));
}
