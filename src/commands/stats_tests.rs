use std::path::Path;

use super::*;
use crate::dataset::parse_dataset;

fn all_stats() -> Vec<Arc<MetricStatistics>> {
    let dataset = parse_dataset(
        r#"{"suiteA":[{"x":10,"y":1},{"x":12,"y":3}],"suiteB":[{"x":8,"y":2}]}"#,
        Path::new("stats.json"),
    )
    .unwrap();
    let cache = StatisticsCache::default();
    ["x", "y"]
        .iter()
        .map(|m| cache.get_or_compute(&dataset, m).unwrap())
        .collect()
}

#[test]
fn text_table_per_metric() {
    let text = format_stats_text(&all_stats());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "x");
    assert!(lines[1].contains("Suite") && lines[1].contains("Std Dev"));
    assert!(lines[2].starts_with("  suiteA"));
    assert!(lines[2].contains("10.00"));
    assert!(lines[2].contains("12.00"));
    assert!(lines[2].contains("11.00"));
    assert!(lines[2].trim_end().ends_with('2'));
    assert!(lines[3].starts_with("  suiteB"));
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "y");
    assert!(!text.ends_with('\n'));
}

#[test]
fn json_keyed_by_metric_then_suite() {
    let json = format_stats_json(&all_stats()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["x"]["suiteA"]["avg"], 11.0);
    assert_eq!(value["x"]["suiteA"]["std"], 1.0);
    assert_eq!(value["x"]["suiteB"]["count"], 1);
    assert_eq!(value["y"]["suiteA"]["max"], 3.0);

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["x", "y"]);
}

#[test]
fn empty_input_formats_empty() {
    assert_eq!(format_stats_text(&[]), "");
    assert_eq!(format_stats_json(&[]).unwrap(), "{}");
}
