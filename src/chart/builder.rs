use super::spec::{ChartKind, ChartOptions, ChartSpec};
use crate::dataset::Dataset;

/// Metrics charted when none are requested and the dataset exposes none.
pub const FALLBACK_METRICS: [&str; 3] = ["averageDuration", "throughput", "peakMemoryUsage"];

/// Number of discovered metrics charted by default.
pub const DEFAULT_METRIC_COUNT: usize = 3;

/// Which chart kinds a batch contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartSelection {
    #[default]
    All,
    Only(ChartKind),
}

impl ChartSelection {
    fn includes(self, kind: ChartKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == kind,
        }
    }
}

/// Enumerates the chart jobs for a metric list.
///
/// For every metric: bar, line, pie and histogram. Then one scatter chart
/// per metric pair `(metrics[i], metrics[j])` with `i < j`, plotted as
/// `metrics[j]` against `metrics[i]`, and finally a single heatmap over all
/// metrics.
#[derive(Debug, Clone, Default)]
pub struct ChartSpecBuilder {
    metrics: Vec<String>,
    selection: ChartSelection,
    scatter_pair: Option<(String, String)>,
    suites: Option<Vec<String>>,
    options: ChartOptions,
}

impl ChartSpecBuilder {
    #[must_use]
    pub fn new(metrics: Vec<String>) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_selection(mut self, selection: ChartSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Replace the enumerated scatter pairs with one `y` against `x` chart.
    #[must_use]
    pub fn with_scatter_pair(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.scatter_pair = Some((x.into(), y.into()));
        self
    }

    #[must_use]
    pub fn with_suites(mut self, suites: Vec<String>) -> Self {
        self.suites = Some(suites);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    #[must_use]
    pub fn build(&self) -> Vec<ChartSpec> {
        let mut specs = Vec::new();

        for metric in &self.metrics {
            for kind in [
                ChartKind::Bar,
                ChartKind::Line,
                ChartKind::Pie,
                ChartKind::Histogram,
            ] {
                if !self.selection.includes(kind) {
                    continue;
                }
                let spec = match kind {
                    ChartKind::Bar => ChartSpec::bar(metric.clone()),
                    ChartKind::Line => ChartSpec::line(metric.clone()),
                    ChartKind::Pie => ChartSpec::pie(metric.clone()),
                    _ => ChartSpec::histogram(metric.clone()),
                };
                specs.push(self.finish(spec));
            }
        }

        if self.wants_scatter() {
            if let Some((x, y)) = &self.scatter_pair {
                specs.push(self.finish(ChartSpec::scatter(x.clone(), y.clone())));
            } else {
                for (i, x) in self.metrics.iter().enumerate() {
                    for y in &self.metrics[i + 1..] {
                        specs.push(self.finish(ChartSpec::scatter(x.clone(), y.clone())));
                    }
                }
            }
        }

        if self.selection.includes(ChartKind::Heatmap) && !self.metrics.is_empty() {
            specs.push(self.finish(ChartSpec::heatmap(self.metrics.clone())));
        }

        specs
    }

    /// A full batch only gets scatter charts once there are two metrics.
    fn wants_scatter(&self) -> bool {
        match self.selection {
            ChartSelection::All => self.metrics.len() >= 2,
            ChartSelection::Only(kind) => kind == ChartKind::Scatter,
        }
    }

    fn finish(&self, spec: ChartSpec) -> ChartSpec {
        let spec = spec.with_options(self.options.clone());
        match &self.suites {
            Some(suites) => spec.with_suites(suites.clone()),
            None => spec,
        }
    }
}

/// First `count` discovered metrics, or `fallback` when the dataset has none.
#[must_use]
pub fn default_metrics(dataset: &Dataset, count: usize, fallback: &[String]) -> Vec<String> {
    if dataset.metrics().is_empty() {
        fallback.to_vec()
    } else {
        dataset.metrics().iter().take(count).cloned().collect()
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
