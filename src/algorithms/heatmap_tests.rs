use std::path::Path;

use super::*;
use crate::PerfChartsError;
use crate::dataset::parse_dataset;

fn dataset() -> Dataset {
    parse_dataset(
        r#"{
            "fast": [{"t": 1, "mem": 10}, {"t": 3, "mem": 20}],
            "slow": [{"t": 10, "mem": 40}]
        }"#,
        Path::new("heatmap.json"),
    )
    .unwrap()
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn cells_are_means_in_input_order() {
    let matrix = heatmap_matrix(&names(&["slow", "fast"]), &names(&["t", "mem"]), &dataset()).unwrap();

    assert_eq!(matrix.rows, names(&["slow", "fast"]));
    assert_eq!(matrix.columns, names(&["t", "mem"]));
    assert_eq!(matrix.cell(0, 0), Some(10.0));
    assert_eq!(matrix.cell(0, 1), Some(40.0));
    assert_eq!(matrix.cell(1, 0), Some(2.0));
    assert_eq!(matrix.cell(1, 1), Some(15.0));
    assert_eq!(matrix.cell(2, 0), None);
}

#[test]
fn range_and_mean() {
    let matrix = heatmap_matrix(&names(&["fast", "slow"]), &names(&["t"]), &dataset()).unwrap();
    assert_eq!(matrix.value_range(), Some((2.0, 10.0)));
    assert_eq!(matrix.mean(), Some(6.0));
}

#[test]
fn unknown_metric() {
    let err = heatmap_matrix(&names(&["fast"]), &names(&["nope"]), &dataset()).unwrap_err();
    assert!(matches!(err, PerfChartsError::MetricNotFound { .. }));
}

#[test]
fn unknown_suite() {
    let err = heatmap_matrix(&names(&["medium"]), &names(&["t"]), &dataset()).unwrap_err();
    assert!(matches!(err, PerfChartsError::SuiteNotFound(ref s) if s == "medium"));
}

#[test]
fn empty_selection() {
    let matrix = heatmap_matrix(&[], &names(&["t"]), &dataset()).unwrap();
    assert!(matrix.is_empty());
    assert_eq!(matrix.value_range(), None);
    assert_eq!(matrix.mean(), None);
}
