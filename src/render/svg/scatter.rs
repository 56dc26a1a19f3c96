//! Scatter chart: one point cloud per suite, optional size metric and trend line.

use super::element::{Line, Marker, SvgElement};
use super::format::format_value;
use super::frame::{Frame, LegendEntry, empty_message};
use super::scale::padded_domain;
use super::style::ChartColor;
use crate::chart::{ScatterData, ThemeColors};

const DEFAULT_RADIUS: f64 = 7.0;
const MIN_RADIUS: f64 = 3.0;
const MAX_RADIUS: f64 = 40.0;
const POINT_OPACITY: f64 = 0.7;

#[derive(Debug)]
pub struct ScatterChart<'a> {
    pub title: String,
    pub data: &'a ScatterData,
    pub view: (f64, f64),
    pub pixel_size: (f64, f64),
    pub colors: ThemeColors,
}

/// Marker radius for a size-metric value. The area grows linearly with
/// `value * 10`.
#[must_use]
pub fn marker_radius(value: Option<f64>) -> f64 {
    value.map_or(DEFAULT_RADIUS, |v| {
        (v * 10.0).max(0.0).sqrt().clamp(MIN_RADIUS, MAX_RADIUS)
    })
}

impl SvgElement for ScatterChart<'_> {
    fn render(&self) -> String {
        let frame = Frame::new(self.view, self.colors, true);
        let mut builder = frame.start(&self.title, self.pixel_size);

        let all_points = || self.data.series.iter().flat_map(|s| s.points.iter());
        if all_points().next().is_none() {
            builder.add_raw(empty_message(self.view, "No data available", self.colors.muted));
            return builder.build();
        }

        let x = frame.x_scale(padded_domain(all_points().map(|p| p.0), false));
        let y = frame.y_scale(padded_domain(all_points().map(|p| p.1), false));
        frame.draw_x_values(&mut builder, &x);
        frame.draw_y_values(&mut builder, &y);

        let mut legend = Vec::new();
        for series in &self.data.series {
            let color = ChartColor::hex(&series.style.color);
            for (i, (px, py)) in series.points.iter().enumerate() {
                let size = series.sizes.as_ref().and_then(|s| s.get(i)).copied();
                builder.add_element(
                    &Marker::new(series.style.marker, x.map(*px), y.map(*py), color.clone())
                        .with_size(marker_radius(size))
                        .with_opacity(POINT_OPACITY)
                        .with_label(format!(
                            "{}: ({}, {})",
                            series.suite,
                            format_value(*px),
                            format_value(*py)
                        )),
                );
            }
            legend.push(LegendEntry::marker(
                series.suite.clone(),
                series.style.color.clone(),
                series.style.marker,
            ));

            if let Some(trend) = series.trend {
                let (lo, hi) = series
                    .points
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                        (lo.min(p.0), hi.max(p.0))
                    });
                let segment = vec![
                    (x.map(lo), y.map(trend.at(lo))),
                    (x.map(hi), y.map(trend.at(hi))),
                ];
                builder.add_element(
                    &Line::new(segment, color)
                        .with_stroke_width(2.0)
                        .with_dash("8,6"),
                );
                legend.push(LegendEntry::dashed(
                    format!("{} trend", series.suite),
                    series.style.color.clone(),
                ));
            }
        }

        frame.draw_legend(&mut builder, &legend);
        frame.draw_axis_titles(&mut builder, &self.data.x_metric, &self.data.y_metric);
        builder.build()
    }
}

#[cfg(test)]
#[path = "scatter_tests.rs"]
mod tests;
