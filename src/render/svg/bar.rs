//! Bar chart: one bar per suite, optionally horizontal, sorted, or stacked by iteration.

use super::element::{Bar, SvgElement};
use super::format::{coord, format_value, html_escape};
use super::frame::{Frame, LABEL_FONT, LegendEntry, empty_message};
use super::scale::padded_domain;
use super::style::ChartColor;
use crate::algorithms::StackLayer;
use crate::chart::{BarData, BarLayout, LabeledValue, ThemeColors};

/// Share of each category band covered by its bar.
const BAR_FILL: f64 = 0.8;

#[derive(Debug)]
pub struct BarChart<'a> {
    pub title: String,
    pub data: &'a BarData,
    pub horizontal: bool,
    pub view: (f64, f64),
    pub pixel_size: (f64, f64),
    pub colors: ThemeColors,
}

impl BarChart<'_> {
    fn render_means(&self, bars: &[LabeledValue]) -> String {
        let frame = Frame::new(self.view, self.colors, false);
        let mut builder = frame.start(&self.title, self.pixel_size);

        if bars.is_empty() {
            builder.add_raw(empty_message(self.view, "No data available", self.colors.muted));
            return builder.build();
        }

        let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
        let domain = padded_domain(bars.iter().map(|b| b.value), true);

        if self.horizontal {
            let x = frame.x_scale(domain);
            frame.draw_x_values(&mut builder, &x);
            frame.draw_y_axis(&mut builder, category_labels(&labels, true));
            for (i, bar) in bars.iter().enumerate() {
                let (y, height) = band(&frame, i, bars.len(), true);
                let (start, end) = ordered(x.map(0.0), x.map(bar.value));
                builder.add_element(&Bar {
                    x: start,
                    y,
                    width: end - start,
                    height,
                    color: ChartColor::hex(&bar.color),
                    label: bar.label.clone(),
                    value: bar.value,
                });
            }
            frame.draw_axis_titles(&mut builder, &self.data.metric, "Suite");
        } else {
            let y = frame.y_scale(domain);
            frame.draw_y_values(&mut builder, &y);
            frame.draw_x_axis(&mut builder, category_labels(&labels, false));
            for (i, bar) in bars.iter().enumerate() {
                let (x, width) = band(&frame, i, bars.len(), false);
                let (top, bottom) = ordered(y.map(bar.value), y.map(0.0));
                builder.add_element(&Bar {
                    x,
                    y: top,
                    width,
                    height: bottom - top,
                    color: ChartColor::hex(&bar.color),
                    label: bar.label.clone(),
                    value: bar.value,
                });
                builder.add_raw(value_label(x + width / 2.0, top - 6.0, bar.value, self.colors));
            }
            frame.draw_axis_titles(&mut builder, "Suite", &self.data.metric);
        }

        builder.build()
    }

    fn render_stacked(
        &self,
        suites: &[String],
        layers: &[StackLayer],
        colors: &[String],
    ) -> String {
        let frame = Frame::new(self.view, self.colors, true);
        let mut builder = frame.start(&self.title, self.pixel_size);

        let extremes = layers
            .iter()
            .flat_map(|layer| layer.tops().into_iter().chain(layer.bottoms.iter().copied()));
        let domain = padded_domain(extremes, true);
        let value_scale = if self.horizontal {
            frame.x_scale(domain)
        } else {
            frame.y_scale(domain)
        };

        if self.horizontal {
            frame.draw_x_values(&mut builder, &value_scale);
            frame.draw_y_axis(&mut builder, category_labels(suites, true));
        } else {
            frame.draw_y_values(&mut builder, &value_scale);
            frame.draw_x_axis(&mut builder, category_labels(suites, false));
        }

        for (layer, color) in layers.iter().zip(colors) {
            for (j, suite) in suites.iter().enumerate() {
                let value = layer.values.get(j).copied().unwrap_or(0.0);
                let bottom = layer.bottoms.get(j).copied().unwrap_or(0.0);
                let (offset, thickness) = band(&frame, j, suites.len(), self.horizontal);
                let (start, end) = ordered(value_scale.map(bottom), value_scale.map(bottom + value));
                let label = format!("{suite} iteration {}", layer.iteration + 1);
                let bar = if self.horizontal {
                    Bar {
                        x: start,
                        y: offset,
                        width: end - start,
                        height: thickness,
                        color: ChartColor::hex(color),
                        label,
                        value,
                    }
                } else {
                    Bar {
                        x: offset,
                        y: start,
                        width: thickness,
                        height: end - start,
                        color: ChartColor::hex(color),
                        label,
                        value,
                    }
                };
                builder.add_element(&bar);
            }
        }

        let legend: Vec<LegendEntry> = layers
            .iter()
            .zip(colors)
            .map(|(layer, color)| {
                LegendEntry::swatch(format!("Iteration {}", layer.iteration + 1), color.clone())
            })
            .collect();
        frame.draw_legend(&mut builder, &legend);

        if self.horizontal {
            frame.draw_axis_titles(&mut builder, &self.data.metric, "Suite");
        } else {
            frame.draw_axis_titles(&mut builder, "Suite", &self.data.metric);
        }
        builder.build()
    }
}

impl SvgElement for BarChart<'_> {
    fn render(&self) -> String {
        match &self.data.layout {
            BarLayout::Means(bars) => self.render_means(bars),
            BarLayout::Stacked {
                suites,
                layers,
                colors,
            } => self.render_stacked(suites, layers, colors),
        }
    }
}

/// Offset and thickness of the bar in category slot `index` of `count`.
#[allow(clippy::cast_precision_loss)]
fn band(frame: &Frame, index: usize, count: usize, horizontal: bool) -> (f64, f64) {
    let plot = frame.plot();
    let (start, length) = if horizontal {
        (plot.top, plot.height)
    } else {
        (plot.left, plot.width)
    };
    let slot = length / count.max(1) as f64;
    let thickness = slot * BAR_FILL;
    let offset = slot.mul_add(index as f64, start) + (slot - thickness) / 2.0;
    (offset, thickness)
}

/// Category labels centred in their slots. Vertical axes count from the
/// bottom, so the first category is listed at the top.
#[allow(clippy::cast_precision_loss)]
fn category_labels(labels: &[String], vertical_axis: bool) -> Vec<(f64, String)> {
    let count = labels.len().max(1) as f64;
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let center = (i as f64 + 0.5) / count;
            let position = if vertical_axis { 1.0 - center } else { center };
            (position, label.clone())
        })
        .collect()
}

const fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn value_label(x: f64, y: f64, value: f64, colors: ThemeColors) -> String {
    format!(
        r#"<text x="{}" y="{}" text-anchor="middle" fill="{}" font-size="{LABEL_FONT}">{}</text>"#,
        coord(x),
        coord(y),
        colors.text,
        html_escape(&format_value(value))
    )
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
