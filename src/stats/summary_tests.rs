use std::path::Path;

use super::*;
use crate::dataset::{extract_series, parse_dataset};

const EPSILON: f64 = 1e-9;

#[test]
fn empty_slice_has_no_summary() {
    assert!(StatSummary::from_values(&[]).is_none());
}

#[test]
fn single_value_has_zero_std() {
    let summary = StatSummary::from_values(&[42.5]).unwrap();
    assert_eq!(summary.count, 1);
    assert!((summary.min - 42.5).abs() < EPSILON);
    assert!((summary.max - 42.5).abs() < EPSILON);
    assert!((summary.avg - 42.5).abs() < EPSILON);
    assert!(summary.std.abs() < f64::EPSILON);
}

#[test]
fn std_is_population_std() {
    // Sample std of these values would be ~2.138; population std is 2.
    let summary = StatSummary::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert!((summary.avg - 5.0).abs() < EPSILON);
    assert!((summary.std - 2.0).abs() < EPSILON);
}

#[test]
fn average_stays_within_bounds_for_constant_data() {
    let values = vec![0.1; 1000];
    let summary = StatSummary::from_values(&values).unwrap();
    assert!(summary.min <= summary.avg && summary.avg <= summary.max);
    assert_eq!(summary.count, 1000);
}

#[test]
fn negative_values() {
    let summary = StatSummary::from_values(&[-3.0, -1.0]).unwrap();
    assert!((summary.min + 3.0).abs() < EPSILON);
    assert!((summary.max + 1.0).abs() < EPSILON);
    assert!((summary.avg + 2.0).abs() < EPSILON);
    assert!((summary.std - 1.0).abs() < EPSILON);
}

#[test]
fn end_to_end_two_suites() {
    let dataset = parse_dataset(
        r#"{"suiteA":[{"x":10},{"x":12}],"suiteB":[{"x":8}]}"#,
        Path::new("e2e.json"),
    )
    .unwrap();
    let series = extract_series(&dataset, "x", None).unwrap();
    let stats = MetricStatistics::from_series(&series);

    assert_eq!(stats.metric, "x");
    let suites: Vec<&String> = stats.by_suite.keys().collect();
    assert_eq!(suites, vec!["suiteA", "suiteB"]);

    let a = stats.get("suiteA").unwrap();
    assert!((a.min - 10.0).abs() < EPSILON);
    assert!((a.max - 12.0).abs() < EPSILON);
    assert!((a.avg - 11.0).abs() < EPSILON);
    assert!((a.std - 1.0).abs() < EPSILON);
    assert_eq!(a.count, 2);

    let b = stats.get("suiteB").unwrap();
    assert!((b.min - 8.0).abs() < EPSILON);
    assert!((b.max - 8.0).abs() < EPSILON);
    assert!((b.avg - 8.0).abs() < EPSILON);
    assert!(b.std.abs() < f64::EPSILON);
    assert_eq!(b.count, 1);

    assert!(stats.get("suiteC").is_none());
}

#[test]
fn count_matches_suite_length_for_every_metric() {
    let dataset = parse_dataset(
        r#"{
            "fast": [{"t": 1.5, "mem": 10}, {"t": 1.7, "mem": 11}, {"t": 1.2, "mem": 9}],
            "slow": [{"t": 9.0, "mem": 50}]
        }"#,
        Path::new("counts.json"),
    )
    .unwrap();

    for metric in dataset.metrics() {
        let series = extract_series(&dataset, metric, None).unwrap();
        let stats = MetricStatistics::from_series(&series);
        for (suite, points) in dataset.suites() {
            let summary = stats.get(suite).unwrap();
            assert_eq!(summary.count, points.len());
            assert!(summary.min <= summary.avg && summary.avg <= summary.max);
            if summary.count == 1 {
                assert!(summary.std.abs() < f64::EPSILON);
            }
        }
    }
}

#[test]
fn serializes_to_json() {
    let summary = StatSummary::from_values(&[1.0, 3.0]).unwrap();
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["avg"], 2.0);
}
