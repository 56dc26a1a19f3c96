use super::*;
use crate::chart::Theme;

#[test]
fn ids_follow_artifact_naming() {
    assert_eq!(ChartSpec::bar("latency").id().as_str(), "latency_bar");
    assert_eq!(ChartSpec::line("latency").id().as_str(), "latency_line");
    assert_eq!(ChartSpec::pie("latency").id().as_str(), "latency_pie");
    assert_eq!(
        ChartSpec::histogram("latency").id().as_str(),
        "latency_histogram"
    );
    assert_eq!(
        ChartSpec::scatter("latency", "memory").id().as_str(),
        "memory_vs_latency_scatter"
    );
    assert_eq!(
        ChartSpec::heatmap(vec!["a".into(), "b".into()]).id().as_str(),
        "a_b_heatmap"
    );
}

#[test]
fn file_name_uses_svg_extension() {
    assert_eq!(ChartSpec::bar("t").id().file_name(), "t_bar.svg");
}

#[test]
fn suite_subset_is_part_of_identity() {
    let all = ChartSpec::bar("t");
    let subset = ChartSpec::bar("t").with_suites(vec!["fast".into(), "slow".into()]);
    assert_eq!(subset.id().as_str(), "t_bar__fast_slow");
    assert_ne!(all.id(), subset.id());
}

#[test]
fn unsafe_characters_are_replaced() {
    let id = ChartSpec::bar("p99 latency/ms").id();
    assert!(id.as_str().starts_with("p99_latency_ms_bar-"), "{id}");
    assert_eq!(id.as_str().len(), "p99_latency_ms_bar-".len() + 8);
    assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric() || "._-".contains(c)));
}

#[test]
fn sanitized_names_do_not_collide() {
    let spaced = ChartSpec::bar("a b").id();
    let underscored = ChartSpec::bar("a_b").id();
    assert_eq!(underscored.as_str(), "a_b_bar");
    assert_ne!(spaced, underscored);
    assert_eq!(spaced, ChartSpec::bar("a b").id());
}

#[test]
fn heatmap_identity_includes_metric_list() {
    let one = ChartSpec::heatmap(vec!["a".into()]).id();
    let two = ChartSpec::heatmap(vec!["a".into(), "b".into()]).id();
    assert_eq!(one.as_str(), "a_heatmap");
    assert_ne!(one, two);
    assert_eq!(ChartSpec::heatmap(Vec::new()).id().as_str(), "heatmap");
}

#[test]
fn joined_parts_containing_separator_do_not_collide() {
    let left = ChartSpec::heatmap(vec!["a_b".into(), "c".into()]).id();
    let right = ChartSpec::heatmap(vec!["a".into(), "b_c".into()]).id();
    assert!(left.as_str().starts_with("a_b_c_heatmap-"));
    assert_ne!(left, right);

    let suite_left = ChartSpec::bar("t").with_suites(vec!["x_y".into(), "z".into()]).id();
    let suite_right = ChartSpec::bar("t").with_suites(vec!["x".into(), "y_z".into()]).id();
    assert_ne!(suite_left, suite_right);

    let scatter_left = ChartSpec::scatter("c", "a_vs_b").id();
    let scatter_right = ChartSpec::scatter("b_vs_c", "a").id();
    assert_ne!(scatter_left, scatter_right);
}

#[test]
fn single_metric_with_underscore_keeps_readable_id() {
    assert_eq!(ChartSpec::line("peak_memory").id().as_str(), "peak_memory_line");
}

#[test]
fn style_and_options_do_not_change_identity() {
    let plain = ChartSpec::line("t");
    let styled = ChartSpec::line("t")
        .with_style(StyleContext::new(Theme::Ggplot, true, 100, (6.0, 4.0)).unwrap())
        .with_options(ChartOptions::default().with_trend_line(true));
    assert_eq!(plain.id(), styled.id());
    assert!(styled.style().is_some());
    assert!(styled.options().trend_line);
}

#[test]
fn ids_order_by_text() {
    let mut ids = vec![
        ChartSpec::line("b").id(),
        ChartSpec::bar("b").id(),
        ChartSpec::bar("a").id(),
    ];
    ids.sort();
    let names: Vec<&str> = ids.iter().map(ChartId::as_str).collect();
    assert_eq!(names, vec!["a_bar", "b_bar", "b_line"]);
}

#[test]
fn default_titles() {
    assert_eq!(ChartSpec::bar("t").title(), "Average t by Suite");
    assert_eq!(ChartSpec::line("t").title(), "t Over Iterations");
    assert_eq!(ChartSpec::scatter("x", "y").title(), "y vs x");
    assert_eq!(ChartSpec::pie("t").title(), "Distribution of t by Suite");
    assert_eq!(ChartSpec::histogram("t").title(), "Distribution of t");
    assert_eq!(
        ChartSpec::heatmap(vec!["t".into()]).title(),
        "Performance Metrics Heatmap"
    );
}

#[test]
fn custom_title_wins() {
    let spec = ChartSpec::pie("t").with_options(ChartOptions::default().with_title("Share"));
    assert_eq!(spec.title(), "Share");
}

#[test]
fn option_defaults() {
    let options = ChartOptions::default();
    assert!(options.markers);
    assert!(options.percentage);
    assert!(!options.trend_line);
    assert_eq!(options.bins, 30);
    assert!(options.size_metric.is_none());
}
