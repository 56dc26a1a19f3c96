//! Line chart: one series per suite over iterations 1..n.

use super::element::{Line, Marker, SvgElement};
use super::format::format_value;
use super::frame::{Frame, LegendEntry, empty_message};
use super::scale::{LinearScale, padded_domain};
use super::style::ChartColor;
use crate::chart::{LineData, ThemeColors};

const MAX_X_LABELS: usize = 10;

#[derive(Debug)]
pub struct LineChart<'a> {
    pub title: String,
    pub data: &'a LineData,
    pub markers: bool,
    pub fill: bool,
    pub view: (f64, f64),
    pub pixel_size: (f64, f64),
    pub colors: ThemeColors,
}

impl SvgElement for LineChart<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let frame = Frame::new(self.view, self.colors, true);
        let mut builder = frame.start(&self.title, self.pixel_size);

        let longest = self
            .data
            .series
            .iter()
            .map(|s| s.values.len())
            .max()
            .unwrap_or(0);
        if longest == 0 {
            builder.add_raw(empty_message(self.view, "No data available", self.colors.muted));
            return builder.build();
        }

        let x = frame.x_scale((1.0, longest as f64));
        let y = frame.y_scale(padded_domain(
            self.data.series.iter().flat_map(|s| s.values.iter().copied()),
            false,
        ));
        frame.draw_y_values(&mut builder, &y);
        frame.draw_x_axis(&mut builder, iteration_labels(longest, &x));

        let baseline = frame.plot().bottom();
        let mut legend = Vec::new();

        for series in &self.data.series {
            let color = ChartColor::hex(&series.style.color);
            let points: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (x.map((i + 1) as f64), y.map(*v)))
                .collect();

            builder.add_element(
                &Line::new(points.clone(), color.clone())
                    .with_fill(self.fill)
                    .with_baseline_y(baseline),
            );

            if self.markers {
                for (i, (px, py)) in points.iter().enumerate() {
                    builder.add_element(
                        &Marker::new(series.style.marker, *px, *py, color.clone()).with_label(
                            format!(
                                "{} #{}: {}",
                                series.suite,
                                i + 1,
                                format_value(series.values[i])
                            ),
                        ),
                    );
                }
                legend.push(LegendEntry::marker(
                    series.suite.clone(),
                    series.style.color.clone(),
                    series.style.marker,
                ));
            } else {
                legend.push(LegendEntry::swatch(
                    series.suite.clone(),
                    series.style.color.clone(),
                ));
            }

            if let Some(trend) = series.trend {
                let last = series.values.len() as f64;
                let segment = vec![
                    (x.map(1.0), y.map(trend.at(1.0))),
                    (x.map(last), y.map(trend.at(last))),
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
        frame.draw_axis_titles(&mut builder, "Iteration", &self.data.metric);
        builder.build()
    }
}

/// Integer iteration ticks, thinned to at most [`MAX_X_LABELS`].
#[allow(clippy::cast_precision_loss)]
fn iteration_labels(longest: usize, x: &LinearScale) -> Vec<(f64, String)> {
    let step = longest.div_ceil(MAX_X_LABELS).max(1);
    (1..=longest)
        .filter(|i| (i - 1) % step == 0 || *i == longest)
        .map(|i| (x.fraction(i as f64), i.to_string()))
        .collect()
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
