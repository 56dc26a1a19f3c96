//! Turns a [`ChartSpec`] into renderer-ready geometry inputs.

use super::spec::{ChartKind, ChartSpec};
use super::style::StyleContext;
use crate::algorithms::{
    AlgorithmError, HeatmapMatrix, HistogramBin, KDE_POINTS, PaletteEntry, StackLayer, TrendLine,
    heatmap_matrix, histogram_bins, iteration_axis, kde_curve, palette_assign, pie_shares,
    stack_layers, trend_line,
};
use crate::dataset::{Dataset, MetricSeries, extract_series};
use crate::stats::StatisticsCache;
use crate::{PerfChartsError, Result};

/// A label with its value and assigned color.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BarLayout {
    /// One bar per suite showing its mean.
    Means(Vec<LabeledValue>),
    /// One segment per iteration; `colors[i]` belongs to `layers[i]`.
    Stacked {
        suites: Vec<String>,
        layers: Vec<StackLayer>,
        colors: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarData {
    pub metric: String,
    pub layout: BarLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub suite: String,
    /// Values in iteration order; iteration `i` is plotted at x = i + 1.
    pub values: Vec<f64>,
    pub trend: Option<TrendLine>,
    pub style: PaletteEntry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineData {
    pub metric: String,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub suite: String,
    pub points: Vec<(f64, f64)>,
    /// Raw size-metric values, parallel to `points`.
    pub sizes: Option<Vec<f64>>,
    pub trend: Option<TrendLine>,
    pub style: PaletteEntry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    pub x_metric: String,
    pub y_metric: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the whole, all slices sum to 1.
    pub share: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieData {
    pub metric: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramData {
    pub metric: String,
    pub bins: Vec<HistogramBin>,
    /// Density curve scaled to bin counts; empty unless requested.
    pub density: Vec<(f64, f64)>,
    pub color: String,
}

/// Computed data for one chart, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputedChart {
    Bar(BarData),
    Line(LineData),
    Scatter(ScatterData),
    Pie(PieData),
    Histogram(HistogramData),
    Heatmap(HeatmapMatrix),
}

impl ComputedChart {
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Scatter(_) => ChartKind::Scatter,
            Self::Pie(_) => ChartKind::Pie,
            Self::Histogram(_) => ChartKind::Histogram,
            Self::Heatmap(_) => ChartKind::Heatmap,
        }
    }

    /// Compute the data `spec` needs. Bar means and pie shares come from
    /// `cache`; the rest is derived from the raw series.
    ///
    /// # Errors
    /// `MetricNotFound`, `SuiteNotFound` or `Schema` for bad selections, and
    /// `Algorithm` when the data cannot form the chart (e.g. negative pie values).
    pub fn compute(
        spec: &ChartSpec,
        dataset: &Dataset,
        cache: &StatisticsCache,
        style: &StyleContext,
    ) -> Result<Self> {
        let suites = resolve_suites(spec, dataset)?;
        let palette = style.palette();

        match spec.kind() {
            ChartKind::Bar => compute_bar(spec, dataset, cache, &suites, palette).map(Self::Bar),
            ChartKind::Line => compute_line(spec, dataset, &suites, palette).map(Self::Line),
            ChartKind::Scatter => {
                compute_scatter(spec, dataset, &suites, palette).map(Self::Scatter)
            }
            ChartKind::Pie => compute_pie(spec, dataset, cache, &suites, palette).map(Self::Pie),
            ChartKind::Histogram => {
                compute_histogram(spec, dataset, &suites, palette).map(Self::Histogram)
            }
            ChartKind::Heatmap => {
                if spec.metrics().is_empty() {
                    return Err(algorithm_error(spec, AlgorithmError::NoValues));
                }
                heatmap_matrix(&suites, spec.metrics(), dataset).map(Self::Heatmap)
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_histogram(
    spec: &ChartSpec,
    dataset: &Dataset,
    suites: &[String],
    palette: &[&str],
) -> Result<HistogramData> {
    let series = extract_series(dataset, spec.metric(), Some(suites))?;
    let values = series.all_values();
    let bins = histogram_bins(&values, spec.options().bins);

    let density = match (spec.options().kde, bins.first(), bins.last()) {
        (true, Some(first), Some(last)) => {
            // Count-scaled, so the curve sits on the same axis as the bars.
            let scale = values.len() as f64 * (first.upper - first.lower);
            kde_curve(&values, first.lower, last.upper, KDE_POINTS)
                .into_iter()
                .map(|(x, d)| (x, d * scale))
                .collect()
        }
        _ => Vec::new(),
    };

    Ok(HistogramData {
        metric: spec.metric().to_string(),
        bins,
        density,
        color: palette.first().copied().unwrap_or("currentColor").to_string(),
    })
}

fn resolve_suites(spec: &ChartSpec, dataset: &Dataset) -> Result<Vec<String>> {
    match spec.suites() {
        Some(selected) => {
            if let Some(missing) = selected.iter().find(|s| dataset.suite(s).is_none()) {
                return Err(PerfChartsError::SuiteNotFound(missing.clone()));
            }
            Ok(selected.to_vec())
        }
        None => Ok(dataset.suite_names().map(str::to_string).collect()),
    }
}

fn algorithm_error(spec: &ChartSpec, err: AlgorithmError) -> PerfChartsError {
    PerfChartsError::Algorithm {
        chart: spec.id().to_string(),
        reason: err.to_string(),
    }
}

/// Per-suite means taken from the statistics cache, in `suites` order.
fn cached_means(
    metric: &str,
    dataset: &Dataset,
    cache: &StatisticsCache,
    suites: &[String],
) -> Result<Vec<f64>> {
    let stats = cache.get_or_compute(dataset, metric)?;
    suites
        .iter()
        .map(|suite| {
            stats
                .get(suite)
                .map(|s| s.avg)
                .ok_or_else(|| PerfChartsError::SuiteNotFound(suite.clone()))
        })
        .collect()
}

fn compute_bar(
    spec: &ChartSpec,
    dataset: &Dataset,
    cache: &StatisticsCache,
    suites: &[String],
    palette: &[&str],
) -> Result<BarData> {
    let metric = spec.metric();

    if spec.options().stacked {
        let series = extract_series(dataset, metric, Some(suites))?;
        if series.iter().any(|(_, values)| values.len() > 1) {
            let values: Vec<&[f64]> = series.iter().map(|(_, v)| v).collect();
            let layers = stack_layers(&values);
            let colors = palette_assign(layers.len(), palette)
                .into_iter()
                .map(|p| p.color)
                .collect();
            return Ok(BarData {
                metric: metric.to_string(),
                layout: BarLayout::Stacked {
                    suites: suites.to_vec(),
                    layers,
                    colors,
                },
            });
        }
    }

    let means = cached_means(metric, dataset, cache, suites)?;
    let mut bars: Vec<LabeledValue> = suites
        .iter()
        .zip(means)
        .zip(palette_assign(suites.len(), palette))
        .map(|((suite, value), entry)| LabeledValue {
            label: suite.clone(),
            value,
            color: entry.color,
        })
        .collect();

    if spec.options().sort_values {
        bars.sort_by(|a, b| a.value.total_cmp(&b.value));
    }

    Ok(BarData {
        metric: metric.to_string(),
        layout: BarLayout::Means(bars),
    })
}

fn compute_line(
    spec: &ChartSpec,
    dataset: &Dataset,
    suites: &[String],
    palette: &[&str],
) -> Result<LineData> {
    let series = extract_series(dataset, spec.metric(), Some(suites))?;
    let styles = palette_assign(series.suite_count(), palette);

    let lines = series
        .iter()
        .zip(styles)
        .map(|((suite, values), style)| LineSeries {
            suite: suite.to_string(),
            values: values.to_vec(),
            trend: if spec.options().trend_line {
                trend_line(&iteration_axis(values.len()), values)
            } else {
                None
            },
            style,
        })
        .collect();

    Ok(LineData {
        metric: spec.metric().to_string(),
        series: lines,
    })
}

fn compute_scatter(
    spec: &ChartSpec,
    dataset: &Dataset,
    suites: &[String],
    palette: &[&str],
) -> Result<ScatterData> {
    let [x_metric, y_metric] = spec.metrics() else {
        return Err(PerfChartsError::Algorithm {
            chart: spec.id().to_string(),
            reason: format!(
                "scatter charts need exactly two metrics, got {}",
                spec.metrics().len()
            ),
        });
    };

    let xs = extract_series(dataset, x_metric, Some(suites))?;
    let ys = extract_series(dataset, y_metric, Some(suites))?;
    let sizes: Option<MetricSeries> = spec
        .options()
        .size_metric
        .as_deref()
        .map(|m| extract_series(dataset, m, Some(suites)))
        .transpose()?;

    let styles = palette_assign(suites.len(), palette);
    let series = suites
        .iter()
        .zip(styles)
        .map(|(suite, style)| {
            let x = xs.values(suite).unwrap_or_default();
            let y = ys.values(suite).unwrap_or_default();
            ScatterSeries {
                suite: suite.clone(),
                points: x.iter().copied().zip(y.iter().copied()).collect(),
                sizes: sizes
                    .as_ref()
                    .and_then(|s| s.values(suite))
                    .map(<[f64]>::to_vec),
                trend: if spec.options().trend_line {
                    trend_line(x, y)
                } else {
                    None
                },
                style,
            }
        })
        .collect();

    Ok(ScatterData {
        x_metric: x_metric.clone(),
        y_metric: y_metric.clone(),
        series,
    })
}

fn compute_pie(
    spec: &ChartSpec,
    dataset: &Dataset,
    cache: &StatisticsCache,
    suites: &[String],
    palette: &[&str],
) -> Result<PieData> {
    let means = cached_means(spec.metric(), dataset, cache, suites)?;
    let shares = pie_shares(&means).map_err(|e| algorithm_error(spec, e))?;

    let slices = suites
        .iter()
        .zip(means)
        .zip(shares)
        .zip(palette_assign(suites.len(), palette))
        .map(|(((suite, value), share), entry)| PieSlice {
            label: suite.clone(),
            value,
            share,
            color: entry.color,
        })
        .collect();

    Ok(PieData {
        metric: spec.metric().to_string(),
        slices,
    })
}

#[cfg(test)]
#[path = "compute_tests.rs"]
mod tests;
