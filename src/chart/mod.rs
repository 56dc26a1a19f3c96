//! Chart descriptions and the data each chart is drawn from.
//!
//! A [`ChartSpec`] says what to draw, [`ChartSpecBuilder`] enumerates the
//! specs for a metric list, and [`ComputedChart`] holds the numbers a
//! renderer needs once a spec has been evaluated against a dataset.

mod builder;
mod compute;
mod spec;
mod style;

pub use builder::{
    ChartSelection, ChartSpecBuilder, DEFAULT_METRIC_COUNT, FALLBACK_METRICS, default_metrics,
};
pub use compute::{
    BarData, BarLayout, ComputedChart, HistogramData, LabeledValue, LineData, LineSeries,
    PieData, PieSlice, ScatterData, ScatterSeries,
};
pub use spec::{ARTIFACT_EXTENSION, ChartId, ChartKind, ChartOptions, ChartSpec};
pub use style::{
    DEFAULT_CANVAS, DEFAULT_DPI, MAX_DPI, MIN_DPI, StyleContext, Theme, ThemeColors,
};
