//! Primitive SVG elements: axes, bars, lines, and markers.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::Write;

use super::format::{coord, format_value, html_escape};
use super::style::{ChartColor, TextAnchor};
use crate::algorithms::MarkerShape;

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks. Label positions are fractions of the axis length.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::hex("#64748b"),
            tick_length: 6.0,
            font_size: 16.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1.5"/>"#,
            coord(self.x),
            coord(self.y),
            coord(end_x),
            coord(end_y)
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1.5"/>"#,
                coord(tick.start_x),
                coord(tick.start_y),
                coord(tick.end_x),
                coord(tick.end_y)
            );

            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                coord(tick.label_x),
                coord(tick.label_y),
                tick.anchor,
                self.font_size
            );
        }

        output
    }
}

/// A single rectangle in a bar chart or histogram.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}">
    <title>{escaped_label}: {}</title>
</rect>"#,
            coord(self.x),
            coord(self.y),
            coord(self.width.max(0.0)),
            coord(self.height.max(0.0)),
            format_value(self.value)
        )
    }
}

/// A polyline, optionally filled down to a baseline or dashed.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub fill: bool,
    pub fill_opacity: f64,
    /// Y-coordinate of the baseline for fill area. Required when `fill=true`.
    /// In SVG coordinates, higher values are lower on screen.
    pub baseline_y: Option<f64>,
    pub dash: Option<&'static str>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 3.0,
            fill: false,
            fill_opacity: 0.15,
            baseline_y: None,
            dash: None,
        }
    }

    /// Enable fill area under the line. Requires `baseline_y` to be set.
    #[must_use]
    pub const fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub const fn with_baseline_y(mut self, y: f64) -> Self {
        self.baseline_y = Some(y);
        self
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub const fn with_dash(mut self, pattern: &'static str) -> Self {
        self.dash = Some(pattern);
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            let _ = write!(path, "{command}{},{}", coord(*x), coord(*y));
        }

        let mut output = String::new();

        // Fill is skipped without a baseline.
        if self.fill
            && self.points.len() >= 2
            && let Some(baseline_y) = self.baseline_y
        {
            let first_x = self.points[0].0;
            let last_x = self.points[self.points.len() - 1].0;
            let mut fill_path = path.clone();
            let _ = write!(
                fill_path,
                " L{},{baseline} L{},{baseline} Z",
                coord(last_x),
                coord(first_x),
                baseline = coord(baseline_y)
            );
            let _ = writeln!(
                output,
                r#"<path d="{fill_path}" fill="{color}" fill-opacity="{}" stroke="none"/>"#,
                self.fill_opacity
            );
        }

        let dash = self
            .dash
            .map(|d| format!(r#" stroke-dasharray="{d}""#))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            r#"<path d="{path}" fill="none" stroke="{color}" stroke-width="{}"{dash} stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke_width
        );

        output
    }
}

/// A data point symbol centred on (`cx`, `cy`). `size` is the radius.
#[derive(Debug, Clone)]
pub struct Marker {
    pub shape: MarkerShape,
    pub cx: f64,
    pub cy: f64,
    pub size: f64,
    pub color: ChartColor,
    pub opacity: f64,
    pub label: String,
}

impl Marker {
    #[must_use]
    pub fn new(shape: MarkerShape, cx: f64, cy: f64, color: ChartColor) -> Self {
        Self {
            shape,
            cx,
            cy,
            size: 6.0,
            color,
            opacity: 1.0,
            label: String::new(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Vertices of a regular polygon with `sides` corners, first corner at `rotation`.
    #[allow(clippy::cast_precision_loss)]
    fn regular_polygon(&self, sides: usize, radius: f64, rotation: f64) -> Vec<(f64, f64)> {
        (0..sides)
            .map(|i| {
                let angle = rotation + 2.0 * PI * i as f64 / sides as f64;
                (
                    radius.mul_add(angle.cos(), self.cx),
                    radius.mul_add(-angle.sin(), self.cy),
                )
            })
            .collect()
    }

    fn star(&self) -> Vec<(f64, f64)> {
        (0..10)
            .map(|i| {
                let radius = if i % 2 == 0 { self.size } else { self.size * 0.45 };
                let angle = FRAC_PI_2 + PI * f64::from(i) / 5.0;
                (
                    radius.mul_add(angle.cos(), self.cx),
                    radius.mul_add(-angle.sin(), self.cy),
                )
            })
            .collect()
    }

    fn shape_body(&self, paint: &str) -> String {
        let (cx, cy, r) = (self.cx, self.cy, self.size);
        let polygon = |points: Vec<(f64, f64)>| {
            let pts: Vec<String> = points
                .iter()
                .map(|(x, y)| format!("{},{}", coord(*x), coord(*y)))
                .collect();
            format!(r#"<polygon points="{}" {paint}>"#, pts.join(" "))
        };

        match self.shape {
            MarkerShape::Circle => format!(
                r#"<circle cx="{}" cy="{}" r="{}" {paint}>"#,
                coord(cx),
                coord(cy),
                coord(r)
            ),
            MarkerShape::Square => format!(
                r#"<rect x="{}" y="{}" width="{side}" height="{side}" {paint}>"#,
                coord(cx - r * 0.85),
                coord(cy - r * 0.85),
                side = coord(r * 1.7)
            ),
            MarkerShape::Diamond => polygon(self.regular_polygon(4, r, FRAC_PI_2)),
            MarkerShape::ThinDiamond => polygon(vec![
                (cx, cy - r),
                (r.mul_add(0.55, cx), cy),
                (cx, cy + r),
                (r.mul_add(-0.55, cx), cy),
            ]),
            MarkerShape::TriangleUp => polygon(self.regular_polygon(3, r, FRAC_PI_2)),
            MarkerShape::TriangleDown => polygon(self.regular_polygon(3, r, -FRAC_PI_2)),
            MarkerShape::TriangleLeft => polygon(self.regular_polygon(3, r, PI)),
            MarkerShape::TriangleRight => polygon(self.regular_polygon(3, r, 0.0)),
            MarkerShape::Pentagon => polygon(self.regular_polygon(5, r, FRAC_PI_2)),
            MarkerShape::Hexagon => polygon(self.regular_polygon(6, r, FRAC_PI_2)),
            MarkerShape::RotatedHexagon => polygon(self.regular_polygon(6, r, 0.0)),
            MarkerShape::Star => polygon(self.star()),
            MarkerShape::Plus => format!(
                r#"<path d="M{},{} L{},{} M{},{} L{},{}" {paint} stroke-width="{}">"#,
                coord(cx - r),
                coord(cy),
                coord(cx + r),
                coord(cy),
                coord(cx),
                coord(cy - r),
                coord(cx),
                coord(cy + r),
                coord(r * 0.4)
            ),
            MarkerShape::Cross => {
                let d = r * 0.75;
                format!(
                    r#"<path d="M{},{} L{},{} M{},{} L{},{}" {paint} stroke-width="{}">"#,
                    coord(cx - d),
                    coord(cy - d),
                    coord(cx + d),
                    coord(cy + d),
                    coord(cx - d),
                    coord(cy + d),
                    coord(cx + d),
                    coord(cy - d),
                    coord(r * 0.4)
                )
            }
        }
    }

    const fn is_stroked(&self) -> bool {
        matches!(self.shape, MarkerShape::Plus | MarkerShape::Cross)
    }

    fn closing_tag(&self) -> &'static str {
        match self.shape {
            MarkerShape::Circle => "</circle>",
            MarkerShape::Square => "</rect>",
            MarkerShape::Plus | MarkerShape::Cross => "</path>",
            _ => "</polygon>",
        }
    }
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let paint = if self.is_stroked() {
            format!(r#"fill="none" stroke="{color}" opacity="{}""#, self.opacity)
        } else {
            format!(r#"fill="{color}" opacity="{}""#, self.opacity)
        };

        let body = self.shape_body(&paint);
        if self.label.is_empty() {
            // Self-close the opening tag when there is no tooltip.
            let open = body.trim_end_matches('>');
            format!("{open}/>")
        } else {
            format!(
                "{body}<title>{}</title>{}",
                html_escape(&self.label),
                self.closing_tag()
            )
        }
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
