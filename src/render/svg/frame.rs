//! Chart furniture shared by the axis-based charts: background, title,
//! grid, axes, and legend.

use std::fmt::Write;

use super::builder::SvgBuilder;
use super::element::{Axis, Line, Marker, SvgElement};
use super::format::{coord, format_value, html_escape};
use super::scale::LinearScale;
use super::style::ChartColor;
use crate::algorithms::MarkerShape;
use crate::chart::ThemeColors;

const MARGIN_LEFT: f64 = 110.0;
const MARGIN_RIGHT: f64 = 50.0;
const MARGIN_TOP: f64 = 90.0;
const MARGIN_BOTTOM: f64 = 100.0;
const LEGEND_WIDTH: f64 = 220.0;
const LEGEND_ROW: f64 = 28.0;

pub const TITLE_FONT: f64 = 28.0;
pub const LABEL_FONT: f64 = 16.0;
const AXIS_TITLE_FONT: f64 = 20.0;
const GRID_TICKS: u32 = 5;

/// Inner drawing rectangle in viewBox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// One legend row. A marker draws the shape, otherwise a swatch or dash.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub marker: Option<MarkerShape>,
    pub dashed: bool,
}

impl LegendEntry {
    #[must_use]
    pub fn swatch(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            marker: None,
            dashed: false,
        }
    }

    #[must_use]
    pub fn marker(label: impl Into<String>, color: impl Into<String>, shape: MarkerShape) -> Self {
        Self {
            marker: Some(shape),
            ..Self::swatch(label, color)
        }
    }

    #[must_use]
    pub fn dashed(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            dashed: true,
            ..Self::swatch(label, color)
        }
    }
}

/// Layout and furniture for one axis-based chart.
#[derive(Debug, Clone)]
pub struct Frame {
    view: (f64, f64),
    plot: PlotArea,
    colors: ThemeColors,
}

impl Frame {
    /// Lay out the plot area for a `view`-sized document, reserving room on
    /// the right when a legend will be drawn.
    #[must_use]
    pub fn new(view: (f64, f64), colors: ThemeColors, with_legend: bool) -> Self {
        let right = if with_legend {
            MARGIN_RIGHT + LEGEND_WIDTH
        } else {
            MARGIN_RIGHT
        };
        let plot = PlotArea {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (view.0 - MARGIN_LEFT - right).max(1.0),
            height: (view.1 - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };
        Self { view, plot, colors }
    }

    #[must_use]
    pub const fn plot(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub const fn colors(&self) -> ThemeColors {
        self.colors
    }

    #[must_use]
    pub fn x_scale(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, (self.plot.left, self.plot.right()))
    }

    #[must_use]
    pub fn y_scale(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, (self.plot.bottom(), self.plot.top))
    }

    /// Document with background, plot background, and centred title.
    #[must_use]
    pub fn start(&self, title: &str, pixel_size: (f64, f64)) -> SvgBuilder {
        let mut builder = SvgBuilder::new(self.view.0, self.view.1)
            .with_title(title)
            .with_pixel_size(pixel_size.0, pixel_size.1)
            .with_background(ChartColor::hex(self.colors.background));

        builder.add_raw(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            coord(self.plot.left),
            coord(self.plot.top),
            coord(self.plot.width),
            coord(self.plot.height),
            self.colors.plot_background
        ));
        builder.add_raw(title_text(self.view.0 / 2.0, title, self.colors.text));
        builder
    }

    /// Horizontal grid lines and the labelled y axis.
    pub fn draw_y_values(&self, builder: &mut SvgBuilder, y: &LinearScale) {
        let mut labels = Vec::new();
        for value in y.ticks(GRID_TICKS) {
            let py = y.map(value);
            builder.add_raw(self.grid_line((self.plot.left, py), (self.plot.right(), py)));
            labels.push((y.fraction(value), format_value(value)));
        }
        builder.add_element(
            &Axis::vertical(self.plot.left, self.plot.bottom(), self.plot.height)
                .with_labels(labels)
                .with_color(ChartColor::hex(self.colors.muted))
                .with_font_size(LABEL_FONT),
        );
    }

    /// Vertical grid lines and the labelled x axis.
    pub fn draw_x_values(&self, builder: &mut SvgBuilder, x: &LinearScale) {
        let mut labels = Vec::new();
        for value in x.ticks(GRID_TICKS) {
            let px = x.map(value);
            builder.add_raw(self.grid_line((px, self.plot.top), (px, self.plot.bottom())));
            labels.push((x.fraction(value), format_value(value)));
        }
        self.draw_x_axis(builder, labels);
    }

    /// x axis with the given labels at fractional positions.
    pub fn draw_x_axis(&self, builder: &mut SvgBuilder, labels: Vec<(f64, String)>) {
        builder.add_element(
            &Axis::horizontal(self.plot.left, self.plot.bottom(), self.plot.width)
                .with_labels(labels)
                .with_color(ChartColor::hex(self.colors.muted))
                .with_font_size(LABEL_FONT),
        );
    }

    /// y axis with the given labels at fractional positions.
    pub fn draw_y_axis(&self, builder: &mut SvgBuilder, labels: Vec<(f64, String)>) {
        builder.add_element(
            &Axis::vertical(self.plot.left, self.plot.bottom(), self.plot.height)
                .with_labels(labels)
                .with_color(ChartColor::hex(self.colors.muted))
                .with_font_size(LABEL_FONT),
        );
    }

    pub fn draw_axis_titles(&self, builder: &mut SvgBuilder, x_title: &str, y_title: &str) {
        let color = self.colors.text;
        let x = self.plot.left + self.plot.width / 2.0;
        let y = self.view.1 - 24.0;
        builder.add_raw(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{color}" font-size="{AXIS_TITLE_FONT}">{}</text>"#,
            coord(x),
            coord(y),
            html_escape(x_title)
        ));

        let x = 28.0;
        let y = self.plot.top + self.plot.height / 2.0;
        builder.add_raw(format!(
            r#"<text x="{x}" y="{}" transform="rotate(-90 {x} {})" text-anchor="middle" fill="{color}" font-size="{AXIS_TITLE_FONT}">{}</text>"#,
            coord(y),
            coord(y),
            html_escape(y_title)
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn draw_legend(&self, builder: &mut SvgBuilder, entries: &[LegendEntry]) {
        let x = self.plot.right() + 24.0;
        let mut output = String::new();

        for (i, entry) in entries.iter().enumerate() {
            let y = LEGEND_ROW.mul_add(i as f64, self.plot.top + 12.0);
            let color = ChartColor::hex(&entry.color);
            let swatch = match (entry.marker, entry.dashed) {
                (Some(shape), _) => {
                    let line = Line::new(vec![(x, y), (x + 28.0, y)], color.clone())
                        .with_stroke_width(2.0)
                        .render();
                    let marker = Marker::new(shape, x + 14.0, y, color).render();
                    format!("{line}{marker}")
                }
                (None, true) => Line::new(vec![(x, y), (x + 28.0, y)], color)
                    .with_stroke_width(2.0)
                    .with_dash("8,6")
                    .render(),
                (None, false) => format!(
                    r#"<rect x="{}" y="{}" width="20" height="14" fill="{}"/>"#,
                    coord(x + 4.0),
                    coord(y - 7.0),
                    color.to_css()
                ),
            };
            let _ = write!(output, "{swatch}");
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" fill="{}" font-size="{LABEL_FONT}">{}</text>"#,
                coord(x + 38.0),
                coord(y + 5.0),
                self.colors.text,
                html_escape(&entry.label)
            );
        }

        builder.add_raw(output);
    }

    fn grid_line(&self, from: (f64, f64), to: (f64, f64)) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1" stroke-dasharray="4,4"/>"#,
            coord(from.0),
            coord(from.1),
            coord(to.0),
            coord(to.1),
            self.colors.grid
        )
    }
}

/// Centred chart title at the top of the document.
#[must_use]
pub fn title_text(center_x: f64, title: &str, color: &str) -> String {
    format!(
        r#"<text x="{}" y="50" text-anchor="middle" fill="{color}" font-size="{TITLE_FONT}" font-weight="600">{}</text>"#,
        coord(center_x),
        html_escape(title)
    )
}

/// Centred placeholder for charts with nothing to draw.
#[must_use]
pub fn empty_message(view: (f64, f64), message: &str, color: &str) -> String {
    format!(
        r#"<text x="{}" y="{}" text-anchor="middle" fill="{color}" font-size="{TITLE_FONT}">{}</text>"#,
        coord(view.0 / 2.0),
        coord(view.1 / 2.0),
        html_escape(message)
    )
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
