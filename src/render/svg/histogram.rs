//! Histogram of every value of one metric, pooled across suites.

use super::element::{Bar, Line, SvgElement};
use super::format::format_value;
use super::frame::{Frame, empty_message};
use super::style::ChartColor;
use crate::chart::{HistogramData, ThemeColors};

#[derive(Debug)]
pub struct HistogramChart<'a> {
    pub title: String,
    pub data: &'a HistogramData,
    pub view: (f64, f64),
    pub pixel_size: (f64, f64),
    pub colors: ThemeColors,
}

impl SvgElement for HistogramChart<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let frame = Frame::new(self.view, self.colors, false);
        let mut builder = frame.start(&self.title, self.pixel_size);

        let (Some(first), Some(last)) = (self.data.bins.first(), self.data.bins.last()) else {
            builder.add_raw(empty_message(self.view, "No data available", self.colors.muted));
            return builder.build();
        };

        let max_count = self.data.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        let top = self
            .data
            .density
            .iter()
            .map(|(_, d)| *d)
            .fold(max_count as f64, f64::max);
        let x = frame.x_scale((first.lower, last.upper));
        let y = frame.y_scale((0.0, top * 1.1));
        frame.draw_x_values(&mut builder, &x);
        frame.draw_y_values(&mut builder, &y);

        let color = ChartColor::hex(&self.data.color);
        for bin in &self.data.bins {
            let left = x.map(bin.lower);
            let right = x.map(bin.upper);
            let top = y.map(bin.count as f64);
            builder.add_element(&Bar {
                x: left,
                y: top,
                width: right - left,
                height: y.map(0.0) - top,
                color: color.clone(),
                label: format!("{} to {}", format_value(bin.lower), format_value(bin.upper)),
                value: bin.count as f64,
            });
        }

        if !self.data.density.is_empty() {
            let points = self
                .data
                .density
                .iter()
                .map(|&(vx, vy)| (x.map(vx), y.map(vy)))
                .collect();
            builder.add_element(
                &Line::new(points, ChartColor::hex(self.colors.text)).with_stroke_width(2.0),
            );
        }

        frame.draw_axis_titles(&mut builder, &self.data.metric, "Frequency");
        builder.build()
    }
}

#[cfg(test)]
#[path = "histogram_tests.rs"]
mod tests;
