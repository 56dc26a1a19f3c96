//! Integration tests for the `charts` command.

mod common;

use common::{SAMPLE_DATASET, TestFixture};
use predicates::prelude::*;

#[test]
fn full_batch_writes_every_chart() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--no-config", "--out-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 16 chart(s)"));

    let files = fixture.list("out");
    assert_eq!(files.len(), 16);
    for expected in [
        "averageDuration_bar.svg",
        "throughput_line.svg",
        "peakMemoryUsage_pie.svg",
        "throughput_histogram.svg",
        "throughput_vs_averageDuration_scatter.svg",
        "averageDuration_peakMemoryUsage_throughput_heatmap.svg",
    ] {
        assert!(files.iter().any(|f| f == expected), "missing {expected}");
    }
    assert!(files.iter().all(|f| !f.ends_with(".tmp")));
    assert!(fixture.read("out/averageDuration_bar.svg").starts_with("<svg"));
}

#[test]
fn single_chart_type() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args([
            "charts",
            "results.json",
            "--no-config",
            "--chart-type",
            "bar",
            "--metrics",
            "throughput",
        ])
        .assert()
        .success();

    assert_eq!(fixture.list("charts"), vec!["throughput_bar.svg"]);
}

#[test]
fn kde_flag_overlays_density_curve() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);
    let base = [
        "charts",
        "results.json",
        "--no-config",
        "--chart-type",
        "histogram",
        "--metrics",
        "throughput",
    ];

    perf_charts!().current_dir(fixture.path()).args(base).assert().success();
    let plain = fixture.read("charts/throughput_histogram.svg");

    perf_charts!()
        .current_dir(fixture.path())
        .args(base)
        .arg("--kde")
        .assert()
        .success();
    let with_curve = fixture.read("charts/throughput_histogram.svg");

    assert!(!plain.contains("stroke-linecap"));
    assert!(with_curve.contains("stroke-linecap"));
}

#[test]
fn scatter_pair_with_trend_line() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args([
            "charts",
            "results.json",
            "--no-config",
            "--chart-type",
            "scatter",
            "--scatter-metrics",
            "averageDuration",
            "peakMemoryUsage",
            "--trend-line",
        ])
        .assert()
        .success();

    let svg = fixture.read("charts/peakMemoryUsage_vs_averageDuration_scatter.svg");
    assert!(svg.contains("trend"));
}

#[test]
fn dark_mode_changes_background() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args([
            "charts",
            "results.json",
            "--no-config",
            "--chart-type",
            "line",
            "--metrics",
            "throughput",
            "--dark-mode",
        ])
        .assert()
        .success();

    assert!(fixture.read("charts/throughput_line.svg").contains("#222222"));
}

#[test]
fn rerun_overwrites_identically() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);
    let args = ["charts", "results.json", "--no-config", "--jobs", "4"];

    perf_charts!().current_dir(fixture.path()).args(args).assert().success();
    let first = fixture.read("charts/averageDuration_peakMemoryUsage_throughput_heatmap.svg");

    perf_charts!().current_dir(fixture.path()).args(args).assert().success();
    let second = fixture.read("charts/averageDuration_peakMemoryUsage_throughput_heatmap.svg");

    assert_eq!(first, second);
    assert_eq!(fixture.list("charts").len(), 16);
}

#[test]
fn unknown_metric_is_an_input_error() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--no-config", "--metrics", "latency"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Metric 'latency' not found"))
        .stderr(predicate::str::contains("averageDuration"));
}

#[test]
fn failed_jobs_exit_one_and_keep_the_rest() {
    let fixture = TestFixture::new();
    // Negative means cannot be drawn as pie slices; everything else can.
    fixture.create_dataset(r#"{"a":[{"delta":-1},{"delta":-3}],"b":[{"delta":-2}]}"#);

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--no-config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 failed"))
        .stderr(predicate::str::contains("delta_pie"));

    let files = fixture.list("charts");
    assert!(files.contains(&"delta_bar.svg".to_string()));
    assert!(!files.contains(&"delta_pie.svg".to_string()));
}

#[test]
fn suite_subset() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args([
            "charts",
            "results.json",
            "--no-config",
            "--chart-type",
            "bar",
            "--metrics",
            "throughput",
            "--suites",
            "optimized",
        ])
        .assert()
        .success();

    assert_eq!(fixture.list("charts"), vec!["throughput_bar__optimized.svg"]);
}

#[test]
fn quiet_prints_nothing_on_success() {
    let fixture = TestFixture::new();
    fixture.create_dataset(SAMPLE_DATASET);

    perf_charts!()
        .current_dir(fixture.path())
        .args(["charts", "results.json", "--no-config", "-q", "--chart-type", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
