use std::error::Error;
use std::path::PathBuf;

use super::*;

#[test]
fn schema_error_names_suite_and_index() {
    let err = PerfChartsError::Schema {
        suite: "b".to_string(),
        index: 2,
        reason: "keys differ".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Schema error in suite 'b' at index 2: keys differ"
    );
}

#[test]
fn metric_not_found_lists_available() {
    let err = PerfChartsError::MetricNotFound {
        metric: "latency".to_string(),
        available: vec!["cpu".to_string(), "mem".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Metric 'latency' not found. Available metrics: cpu, mem"
    );
}

#[test]
fn file_read_keeps_source() {
    let err = PerfChartsError::FileRead {
        path: PathBuf::from("data.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("data.json"));
    assert_eq!(err.source().map(ToString::to_string), Some("gone".to_string()));
}

#[test]
fn cache_metric_not_found_is_flattened() {
    let err: PerfChartsError = CacheError::MetricNotFound {
        metric: "x".to_string(),
        available: vec!["y".to_string()],
    }
    .into();
    assert!(matches!(err, PerfChartsError::MetricNotFound { ref metric, .. } if metric == "x"));
}

#[test]
fn cache_computation_error_is_wrapped() {
    let err: PerfChartsError = CacheError::Computation {
        metric: "x".to_string(),
        reason: "suite 'b' lacks it".to_string(),
    }
    .into();
    assert!(matches!(err, PerfChartsError::Cache(_)));
    assert!(err.to_string().starts_with("Statistics cache error:"));
}

#[test]
fn timeout_display() {
    let err = PerfChartsError::JobTimedOut {
        elapsed_ms: 1500,
        limit_ms: 1000,
    };
    assert_eq!(err.to_string(), "Chart job took 1500 ms, limit is 1000 ms");
}

#[test]
fn toml_error_converts() {
    let toml_err = toml::from_str::<toml::Table>("a = ").unwrap_err();
    let err: PerfChartsError = toml_err.into();
    assert!(err.to_string().starts_with("TOML parse error:"));
}

#[test]
fn io_error_converts() {
    let err: PerfChartsError =
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
    assert_eq!(err.to_string(), "IO error: denied");
}
