//! Pie chart of suite means.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use super::builder::SvgBuilder;
use super::element::SvgElement;
use super::format::{coord, format_percent, format_value, html_escape};
use super::frame::{LABEL_FONT, empty_message, title_text};
use super::style::ChartColor;
use crate::chart::{PieData, ThemeColors};

/// Outward offset of exploded slices, as a fraction of the radius.
pub const EXPLODE_OFFSET: f64 = 0.05;

#[derive(Debug)]
pub struct PieChart<'a> {
    pub title: String,
    pub data: &'a PieData,
    pub explode: bool,
    pub percentage: bool,
    pub view: (f64, f64),
    pub pixel_size: (f64, f64),
    pub colors: ThemeColors,
}

impl PieChart<'_> {
    fn point(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
        (
            radius.mul_add(angle.cos(), center.0),
            radius.mul_add(angle.sin(), center.1),
        )
    }
}

impl SvgElement for PieChart<'_> {
    fn render(&self) -> String {
        let (width, height) = self.view;
        let mut builder = SvgBuilder::new(width, height)
            .with_title(&self.title)
            .with_pixel_size(self.pixel_size.0, self.pixel_size.1)
            .with_background(ChartColor::hex(self.colors.background));
        builder.add_raw(title_text(width / 2.0, &self.title, self.colors.text));

        if self.data.slices.iter().all(|s| s.share <= 0.0) {
            builder.add_raw(empty_message(self.view, "No data available", self.colors.muted));
            return builder.build();
        }

        let center = (width / 2.0, height / 2.0 + 30.0);
        let radius = width.min(height - 160.0).max(10.0) * 0.36;
        let offset = if self.explode {
            radius * EXPLODE_OFFSET
        } else {
            0.0
        };

        // Clockwise from 12 o'clock.
        let mut angle = -FRAC_PI_2;
        let mut output = String::new();
        for slice in &self.data.slices {
            if slice.share <= 0.0 {
                continue;
            }
            let sweep = slice.share * TAU;
            let mid = sweep.mul_add(0.5, angle);
            let origin = Self::point(center, offset, mid);
            let tooltip = format!(
                "<title>{}: {} ({})</title>",
                html_escape(&slice.label),
                format_value(slice.value),
                format_percent(slice.share)
            );

            if slice.share >= 1.0 - 1e-9 {
                let _ = writeln!(
                    output,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="2">{tooltip}</circle>"#,
                    coord(origin.0),
                    coord(origin.1),
                    coord(radius),
                    slice.color,
                    self.colors.background
                );
            } else {
                let start = Self::point(origin, radius, angle);
                let end = Self::point(origin, radius, angle + sweep);
                let large_arc = u8::from(sweep > std::f64::consts::PI);
                let _ = writeln!(
                    output,
                    r#"<path d="M{},{} L{},{} A{r},{r} 0 {large_arc} 1 {},{} Z" fill="{}" stroke="{}" stroke-width="2">{tooltip}</path>"#,
                    coord(origin.0),
                    coord(origin.1),
                    coord(start.0),
                    coord(start.1),
                    coord(end.0),
                    coord(end.1),
                    slice.color,
                    self.colors.background,
                    r = coord(radius)
                );
            }

            if self.percentage {
                let at = Self::point(origin, radius * 0.6, mid);
                let _ = writeln!(
                    output,
                    r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="{}" font-size="{LABEL_FONT}">{}</text>"#,
                    coord(at.0),
                    coord(at.1),
                    self.colors.text,
                    format_percent(slice.share)
                );
            }

            let at = Self::point(origin, radius * 1.12, mid);
            let anchor = if mid.cos() >= 0.0 { "start" } else { "end" };
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{anchor}" dominant-baseline="middle" fill="{}" font-size="{LABEL_FONT}">{}</text>"#,
                coord(at.0),
                coord(at.1),
                self.colors.text,
                html_escape(&slice.label)
            );

            angle += sweep;
        }

        builder.add_raw(output);
        builder.build()
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
