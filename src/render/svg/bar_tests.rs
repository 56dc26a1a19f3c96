use super::*;
use crate::algorithms::stack_layers;
use crate::chart::StyleContext;

fn means(values: &[(&str, f64)]) -> BarData {
    BarData {
        metric: "t".to_string(),
        layout: BarLayout::Means(
            values
                .iter()
                .map(|(label, value)| LabeledValue {
                    label: (*label).to_string(),
                    value: *value,
                    color: "#1f77b4".to_string(),
                })
                .collect(),
        ),
    }
}

fn chart(data: &BarData, horizontal: bool) -> String {
    BarChart {
        title: "Average t by Suite".to_string(),
        data,
        horizontal,
        view: (1200.0, 800.0),
        pixel_size: (3600.0, 2400.0),
        colors: StyleContext::default().colors(),
    }
    .render()
}

#[test]
fn one_rect_per_suite() {
    let svg = chart(&means(&[("suiteA", 11.0), ("suiteB", 8.0)]), false);
    assert!(svg.contains("<title>suiteA: 11</title>"));
    assert!(svg.contains("<title>suiteB: 8</title>"));
    assert!(svg.contains(">suiteA</text>"));
    assert!(svg.contains(">Suite</text>"));
}

#[test]
fn taller_bar_for_larger_value() {
    let svg = chart(&means(&[("a", 10.0), ("b", 5.0)]), false);
    let heights: Vec<f64> = svg
        .lines()
        .filter(|l| l.contains("<rect") && l.contains("#1f77b4"))
        .filter_map(|l| l.split("height=\"").nth(1))
        .filter_map(|rest| rest.split('"').next())
        .filter_map(|h| h.parse().ok())
        .collect();
    assert_eq!(heights.len(), 2);
    assert!((heights[0] / heights[1] - 2.0).abs() < 0.01);
}

#[test]
fn horizontal_swaps_axes() {
    let svg = chart(&means(&[("a", 10.0), ("b", 5.0)]), true);
    // Metric becomes the x axis title.
    let x_title = svg.find(">t</text>").unwrap();
    let y_title = svg.find(">Suite</text>").unwrap();
    assert!(x_title < y_title);
}

#[test]
fn empty_bars_show_message() {
    let svg = chart(&means(&[]), false);
    assert!(svg.contains("No data available"));
}

#[test]
fn stacked_draws_segment_per_iteration_and_legend() {
    let layers = stack_layers(&[vec![1.0, 2.0], vec![3.0]]);
    let data = BarData {
        metric: "t".to_string(),
        layout: BarLayout::Stacked {
            suites: vec!["A".to_string(), "B".to_string()],
            layers,
            colors: vec!["#111111".to_string(), "#222222".to_string()],
        },
    };
    let svg = chart(&data, false);
    assert!(svg.contains("<title>A iteration 2: 2</title>"));
    assert!(svg.contains("<title>B iteration 2: 0</title>"));
    assert!(svg.contains(">Iteration 1</text>"));
    assert!(svg.contains(">Iteration 2</text>"));
}

#[test]
fn category_labels_are_centred() {
    let labels = category_labels(&["a".to_string(), "b".to_string()], false);
    assert!((labels[0].0 - 0.25).abs() < f64::EPSILON);
    assert!((labels[1].0 - 0.75).abs() < f64::EPSILON);

    let vertical = category_labels(&["a".to_string(), "b".to_string()], true);
    assert!((vertical[0].0 - 0.75).abs() < f64::EPSILON);
}
