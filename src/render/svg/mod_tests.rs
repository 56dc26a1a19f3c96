use std::path::Path;

use super::*;
use crate::chart::{ChartOptions, Theme};
use crate::dataset::{Dataset, parse_dataset};
use crate::stats::StatisticsCache;

fn sample() -> Dataset {
    parse_dataset(
        r#"{"suiteA":[{"t":10,"mem":1},{"t":12,"mem":2}],"suiteB":[{"t":8,"mem":4}]}"#,
        Path::new("svg.json"),
    )
    .unwrap()
}

fn render(spec: &ChartSpec, style: &StyleContext) -> String {
    let chart = ComputedChart::compute(spec, &sample(), &StatisticsCache::default(), style).unwrap();
    render_chart(spec, &chart, style)
}

#[test]
fn every_kind_renders_a_document() {
    let style = StyleContext::default();
    for spec in [
        ChartSpec::bar("t"),
        ChartSpec::line("t"),
        ChartSpec::scatter("t", "mem"),
        ChartSpec::pie("t"),
        ChartSpec::histogram("t"),
        ChartSpec::heatmap(vec!["mem".into(), "t".into()]),
    ] {
        let svg = render(&spec, &style);
        assert!(svg.starts_with("<svg"), "{}", spec.id());
        assert!(svg.trim_end().ends_with("</svg>"), "{}", spec.id());
        assert!(svg.contains(&format!("<title>{}</title>", spec.title())));
    }
}

#[test]
fn pixel_size_follows_dpi() {
    let style = StyleContext::new(Theme::Default, false, 100, (12.0, 8.0)).unwrap();
    let svg = render(&ChartSpec::bar("t"), &style);
    assert!(svg.starts_with("<svg width=\"1200\" height=\"800\" viewBox=\"0 0 1200 800\""));
}

#[test]
fn pie_is_square() {
    let style = StyleContext::default();
    let svg = render(&ChartSpec::pie("t"), &style);
    assert!(svg.contains("viewBox=\"0 0 1000 1000\""));
}

#[test]
fn heatmap_canvas_ignores_style_canvas() {
    let style = StyleContext::new(Theme::Default, false, 72, (20.0, 20.0)).unwrap();
    let svg = render(&ChartSpec::heatmap(vec!["t".into()]), &style);
    assert!(svg.contains("viewBox=\"0 0 800 600\""));
}

#[test]
fn dark_mode_changes_background() {
    let light = render(&ChartSpec::bar("t"), &StyleContext::default());
    let dark_style = StyleContext::new(Theme::Default, true, 300, (12.0, 8.0)).unwrap();
    let dark = render(&ChartSpec::bar("t"), &dark_style);
    assert!(dark.contains("fill=\"#222222\""));
    assert!(!light.contains("fill=\"#222222\""));
}

#[test]
fn same_inputs_render_identically() {
    let style = StyleContext::default();
    let spec = ChartSpec::line("t").with_options(ChartOptions::default().with_trend_line(true));
    assert_eq!(render(&spec, &style), render(&spec, &style));
}

#[test]
fn custom_title_is_used() {
    let spec = ChartSpec::bar("t").with_options(ChartOptions::default().with_title("Latency"));
    let svg = render(&spec, &StyleContext::default());
    assert!(svg.contains("<title>Latency</title>"));
}
