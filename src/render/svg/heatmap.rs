//! Heatmap of suite × metric means with a color bar.

use std::fmt::Write;

use super::builder::SvgBuilder;
use super::element::SvgElement;
use super::format::{coord, format_value, html_escape};
use super::frame::{LABEL_FONT, empty_message, title_text};
use super::style::ChartColor;
use crate::algorithms::HeatmapMatrix;
use crate::chart::ThemeColors;

const MARGIN_LEFT: f64 = 200.0;
const MARGIN_TOP: f64 = 90.0;
const MARGIN_BOTTOM: f64 = 130.0;
const MARGIN_RIGHT: f64 = 170.0;
const COLOR_BAR_STEPS: u32 = 40;
const COLOR_BAR_WIDTH: f64 = 28.0;

#[derive(Debug)]
pub struct HeatmapChart<'a> {
    pub title: String,
    pub matrix: &'a HeatmapMatrix,
    pub stops: &'static [&'static str],
    pub view: (f64, f64),
    pub pixel_size: (f64, f64),
    pub colors: ThemeColors,
}

/// Canvas in inches: wide enough for every metric column, tall enough for every suite row.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn heatmap_canvas(matrix: &HeatmapMatrix) -> (f64, f64) {
    (
        (matrix.columns.len() as f64 * 1.5).max(8.0),
        (matrix.rows.len() as f64 * 0.8).max(6.0),
    )
}

/// Annotation color: white on cells below the matrix mean, black otherwise.
#[must_use]
pub const fn annotation_color(value: f64, mean: f64) -> &'static str {
    if value < mean { "#ffffff" } else { "#000000" }
}

impl HeatmapChart<'_> {
    fn draw_color_bar(&self, output: &mut String, low: f64, high: f64, top: f64, height: f64) {
        let x = self.view.0 - MARGIN_RIGHT + 50.0;
        let step = height / f64::from(COLOR_BAR_STEPS);
        for i in 0..COLOR_BAR_STEPS {
            // Highest values at the top.
            let t = 1.0 - (f64::from(i) + 0.5) / f64::from(COLOR_BAR_STEPS);
            let y = step.mul_add(f64::from(i), top);
            let _ = writeln!(
                output,
                r#"<rect x="{}" y="{}" width="{COLOR_BAR_WIDTH}" height="{}" fill="{}"/>"#,
                coord(x),
                coord(y),
                coord(step + 0.5),
                ChartColor::gradient(self.stops, t).to_css()
            );
        }
        for (value, y) in [(high, top + 6.0), (low, top + height)] {
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" fill="{}" font-size="{LABEL_FONT}">{}</text>"#,
                coord(x + COLOR_BAR_WIDTH + 8.0),
                coord(y),
                self.colors.text,
                format_value(value)
            );
        }
    }
}

impl SvgElement for HeatmapChart<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let (width, height) = self.view;
        let mut builder = SvgBuilder::new(width, height)
            .with_title(&self.title)
            .with_pixel_size(self.pixel_size.0, self.pixel_size.1)
            .with_background(ChartColor::hex(self.colors.background));
        builder.add_raw(title_text(width / 2.0, &self.title, self.colors.text));

        let (Some((low, high)), Some(mean)) = (self.matrix.value_range(), self.matrix.mean())
        else {
            builder.add_raw(empty_message(self.view, "No data available", self.colors.muted));
            return builder.build();
        };

        let grid_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let grid_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let cell_width = grid_width / self.matrix.columns.len() as f64;
        let cell_height = grid_height / self.matrix.rows.len() as f64;
        let span = high - low;

        let mut output = String::new();
        for (r, suite) in self.matrix.rows.iter().enumerate() {
            let y = cell_height.mul_add(r as f64, MARGIN_TOP);
            for (c, metric) in self.matrix.columns.iter().enumerate() {
                let Some(value) = self.matrix.cell(r, c) else {
                    continue;
                };
                let x = cell_width.mul_add(c as f64, MARGIN_LEFT);
                let t = if span > 0.0 { (value - low) / span } else { 0.5 };
                let _ = writeln!(
                    output,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="1"><title>{} / {}: {}</title></rect>"#,
                    coord(x),
                    coord(y),
                    coord(cell_width),
                    coord(cell_height),
                    ChartColor::gradient(self.stops, t).to_css(),
                    self.colors.background,
                    html_escape(suite),
                    html_escape(metric),
                    format_value(value)
                );
                let _ = writeln!(
                    output,
                    r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="{}" font-size="{LABEL_FONT}">{value:.2}</text>"#,
                    coord(x + cell_width / 2.0),
                    coord(y + cell_height / 2.0),
                    annotation_color(value, mean)
                );
            }

            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="end" dominant-baseline="middle" fill="{}" font-size="{LABEL_FONT}">{}</text>"#,
                coord(MARGIN_LEFT - 10.0),
                coord(y + cell_height / 2.0),
                self.colors.text,
                html_escape(suite)
            );
        }

        // Column labels, slanted like the rotated tick labels of wide matrices.
        let label_y = MARGIN_TOP + grid_height + 20.0;
        for (c, metric) in self.matrix.columns.iter().enumerate() {
            let x = cell_width.mul_add(c as f64 + 0.5, MARGIN_LEFT);
            let _ = writeln!(
                output,
                r#"<text x="{x}" y="{y}" transform="rotate(45 {x} {y})" text-anchor="start" fill="{}" font-size="{LABEL_FONT}">{}</text>"#,
                self.colors.text,
                html_escape(metric),
                x = coord(x),
                y = coord(label_y)
            );
        }

        self.draw_color_bar(&mut output, low, high, MARGIN_TOP, grid_height);
        builder.add_raw(output);
        builder.build()
    }
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod tests;
