use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::chart::{ChartKind, Theme};
use crate::cli::{Cli, Commands};
use crate::dataset::parse_dataset;

fn sample() -> Dataset {
    parse_dataset(
        r#"{"fast":[{"lat":1,"mem":10,"cpu":3,"io":1}],"slow":[{"lat":4,"mem":30,"cpu":5,"io":2}]}"#,
        Path::new("ctx.json"),
    )
    .unwrap()
}

fn chart_args(extra: &[&str]) -> ChartArgs {
    let mut argv = vec!["perf-charts", "charts", "data.json"];
    argv.extend_from_slice(extra);
    match Cli::parse_from(argv).command {
        Commands::Charts(args) => args,
        other => panic!("Expected Charts command, got {other:?}"),
    }
}

fn context(extra: &[&str], config: &Config) -> Result<ChartContext> {
    ChartContext::from_args(&chart_args(extra), config, &sample(), PathBuf::from("out"))
}

#[test]
fn no_config_returns_default() {
    let result = load_config(Some(Path::new("/does/not/matter.toml")), true).unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn explicit_config_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[batch]\nworkers = 3\n").unwrap();

    let result = load_config(Some(&path), false).unwrap();

    assert_eq!(result.config.batch.workers, 3);
    assert_eq!(result.source, Some(path));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let err = load_config(Some(Path::new("/no/such/perf.toml")), false).unwrap_err();
    assert!(matches!(err, PerfChartsError::FileRead { .. }));
}

#[test]
fn default_metrics_follow_config_count() {
    let mut config = Config::default();
    assert_eq!(
        resolve_metrics(&sample(), &[], &config).unwrap(),
        vec!["cpu", "io", "lat"]
    );

    config.charts.default_metric_count = 1;
    assert_eq!(resolve_metrics(&sample(), &[], &config).unwrap(), vec!["cpu"]);
}

#[test]
fn requested_metrics_must_exist() {
    let err = resolve_metrics(&sample(), &["nope".to_string()], &Config::default()).unwrap_err();
    assert!(matches!(err, PerfChartsError::MetricNotFound { ref metric, .. } if metric == "nope"));

    let ok = resolve_metrics(&sample(), &["io".to_string()], &Config::default()).unwrap();
    assert_eq!(ok, vec!["io"]);
}

#[test]
fn flags_override_config() {
    let mut config = Config::default();
    config.batch.workers = 8;
    config.style.theme = Theme::Minimal;

    let ctx = context(
        &["--jobs", "2", "--style", "seaborn", "--dark-mode", "--timeout", "0"],
        &config,
    )
    .unwrap();

    assert_eq!(ctx.batch.workers, 2);
    assert_eq!(ctx.batch.job_timeout, None);
    assert_eq!(ctx.style.theme(), Theme::Seaborn);
    assert!(ctx.style.dark_mode());
    assert_eq!(ctx.batch.style, ctx.style);
    assert_eq!(ctx.batch.output_dir, PathBuf::from("out"));
}

#[test]
fn config_values_apply_without_flags() {
    let mut config = Config::default();
    config.batch.workers = 6;
    config.batch.job_timeout_secs = 9;
    config.charts.trend_line = true;
    config.charts.histogram_bins = 4;

    let ctx = context(&[], &config).unwrap();

    assert_eq!(ctx.batch.workers, 6);
    assert_eq!(ctx.batch.job_timeout, Some(Duration::from_secs(9)));
    let specs = ctx.builder.build();
    assert!(specs.iter().all(|s| s.options().trend_line));
    assert!(specs.iter().all(|s| s.options().bins == 4));
}

#[test]
fn chart_type_and_scatter_pair() {
    let ctx = context(
        &["--chart-type", "scatter", "--scatter-metrics", "lat", "io"],
        &Config::default(),
    )
    .unwrap();

    let specs = ctx.builder.build();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].kind(), ChartKind::Scatter);
    assert_eq!(specs[0].id().as_str(), "io_vs_lat_scatter");
}

#[test]
fn unknown_scatter_metric_is_rejected() {
    let err = context(&["--scatter-metrics", "lat", "nope"], &Config::default()).unwrap_err();
    assert!(matches!(err, PerfChartsError::MetricNotFound { .. }));
}

#[test]
fn unknown_suite_is_rejected() {
    let err = context(&["--suites", "medium"], &Config::default()).unwrap_err();
    assert!(matches!(err, PerfChartsError::SuiteNotFound(ref s) if s == "medium"));
}

#[test]
fn invalid_dpi_is_rejected() {
    let err = context(&["--dpi", "5"], &Config::default()).unwrap_err();
    assert!(matches!(err, PerfChartsError::InvalidStyle(_)));
}

#[test]
fn ensure_dir_creates_nested() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());
    ensure_dir(Path::new("")).unwrap();
}
