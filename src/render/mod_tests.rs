use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::dataset::parse_dataset;
use crate::stats::StatisticsCache;

fn computed(spec: &ChartSpec) -> ComputedChart {
    let data = parse_dataset(r#"{"a":[{"t":1},{"t":3}],"b":[{"t":2}]}"#, Path::new("r.json"))
        .unwrap();
    ComputedChart::compute(spec, &data, &StatisticsCache::default(), &StyleContext::default())
        .unwrap()
}

#[test]
fn svg_renderer_is_isolated() {
    assert_eq!(SvgRenderer.backend_state(), BackendState::Isolated);
}

#[test]
fn writes_file_and_creates_parent() {
    let dir = TempDir::new().unwrap();
    let spec = ChartSpec::bar("t");
    let destination = dir.path().join("charts").join(spec.id().file_name());

    SvgRenderer
        .render(&spec, &computed(&spec), &StyleContext::default(), &destination)
        .unwrap();

    let content = std::fs::read_to_string(&destination).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(!dir.path().join("charts").join("t_bar.svg.tmp").exists());
}

#[test]
fn rerun_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let spec = ChartSpec::line("t");
    let destination = dir.path().join("t_line.svg");
    let chart = computed(&spec);

    std::fs::write(&destination, "stale").unwrap();
    SvgRenderer
        .render(&spec, &chart, &StyleContext::default(), &destination)
        .unwrap();
    let first = std::fs::read_to_string(&destination).unwrap();
    SvgRenderer
        .render(&spec, &chart, &StyleContext::default(), &destination)
        .unwrap();
    let second = std::fs::read_to_string(&destination).unwrap();

    assert_ne!(first, "stale");
    assert_eq!(first, second);
}

#[test]
fn mismatched_data_is_rejected() {
    let dir = TempDir::new().unwrap();
    let pie = computed(&ChartSpec::pie("t"));
    let err = SvgRenderer
        .render(
            &ChartSpec::bar("t"),
            &pie,
            &StyleContext::default(),
            &dir.path().join("x.svg"),
        )
        .unwrap_err();
    assert!(matches!(err, PerfChartsError::RenderRejected { .. }));
    assert!(!dir.path().join("x.svg").exists());
}

#[test]
fn unwritable_destination_is_a_render_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file, not a directory").unwrap();

    let err = write_atomic(&blocker.join("chart.svg"), b"<svg/>").unwrap_err();
    assert!(matches!(err, PerfChartsError::Render { .. }));
}

#[test]
fn temp_path_appends_suffix() {
    assert_eq!(
        temp_path(Path::new("out/a_bar.svg")),
        Path::new("out/a_bar.svg.tmp")
    );
}
