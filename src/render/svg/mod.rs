//! Standalone SVG chart documents.
//!
//! Every chart is drawn in viewBox units of 100 per canvas inch; the
//! document's `width`/`height` attributes carry the pixel size implied by the
//! style's DPI, so one drawing serves every resolution.

mod bar;
mod builder;
mod element;
mod format;
mod frame;
mod heatmap;
mod histogram;
mod line;
mod pie;
mod scale;
mod scatter;
mod style;

pub use bar::BarChart;
pub use builder::SvgBuilder;
pub use element::{Axis, AxisOrientation, Bar, Line, Marker, SvgElement};
pub use format::{format_percent, format_value, html_escape};
pub use frame::{Frame, LegendEntry, PlotArea};
pub use heatmap::{HeatmapChart, annotation_color, heatmap_canvas};
pub use histogram::HistogramChart;
pub use line::LineChart;
pub use pie::{EXPLODE_OFFSET, PieChart};
pub use scale::{LinearScale, padded_domain};
pub use scatter::{ScatterChart, marker_radius};
pub use style::{ChartColor, TextAnchor};

use crate::chart::{ChartSpec, ComputedChart, StyleContext};

/// ViewBox units per canvas inch.
pub const UNITS_PER_INCH: f64 = 100.0;

/// Pie charts are always square.
pub const PIE_CANVAS: (f64, f64) = (10.0, 10.0);

/// Canvas in inches for `chart`.
#[must_use]
pub fn canvas_for(chart: &ComputedChart, style: &StyleContext) -> (f64, f64) {
    match chart {
        ComputedChart::Pie(_) => PIE_CANVAS,
        ComputedChart::Heatmap(matrix) => heatmap_canvas(matrix),
        _ => style.canvas(),
    }
}

/// Render `chart` as a complete SVG document.
#[must_use]
pub fn render_chart(spec: &ChartSpec, chart: &ComputedChart, style: &StyleContext) -> String {
    let (w, h) = canvas_for(chart, style);
    let view = (w * UNITS_PER_INCH, h * UNITS_PER_INCH);
    let dpi = f64::from(style.dpi());
    let pixel_size = (w * dpi, h * dpi);
    let colors = style.colors();
    let title = spec.title();
    let options = spec.options();

    match chart {
        ComputedChart::Bar(data) => BarChart {
            title,
            data,
            horizontal: options.horizontal,
            view,
            pixel_size,
            colors,
        }
        .render(),
        ComputedChart::Line(data) => LineChart {
            title,
            data,
            markers: options.markers,
            fill: options.fill,
            view,
            pixel_size,
            colors,
        }
        .render(),
        ComputedChart::Scatter(data) => ScatterChart {
            title,
            data,
            view,
            pixel_size,
            colors,
        }
        .render(),
        ComputedChart::Pie(data) => PieChart {
            title,
            data,
            explode: options.explode,
            percentage: options.percentage,
            view,
            pixel_size,
            colors,
        }
        .render(),
        ComputedChart::Histogram(data) => HistogramChart {
            title,
            data,
            view,
            pixel_size,
            colors,
        }
        .render(),
        ComputedChart::Heatmap(matrix) => HeatmapChart {
            title,
            matrix,
            stops: style.heatmap_stops(),
            view,
            pixel_size,
            colors,
        }
        .render(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
