use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::style::StyleContext;
use crate::algorithms::DEFAULT_HISTOGRAM_BINS;

/// Artifact file extension written by the renderer.
pub const ARTIFACT_EXTENSION: &str = "svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Pie,
    Histogram,
    Heatmap,
}

impl ChartKind {
    pub const ALL: [Self; 6] = [
        Self::Bar,
        Self::Line,
        Self::Scatter,
        Self::Pie,
        Self::Histogram,
        Self::Heatmap,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Histogram => "histogram",
            Self::Heatmap => "heatmap",
        }
    }

    /// Human label used in report headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar Chart",
            Self::Line => "Line Chart",
            Self::Scatter => "Scatter Chart",
            Self::Pie => "Pie Chart",
            Self::Histogram => "Histogram",
            Self::Heatmap => "Heatmap",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a chart job: kind, metrics and suite subset folded into a
/// file-safe stem. Two specs with the same id write the same artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChartId(String);

impl ChartId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Artifact file name, e.g. `latency_bar.svg`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{ARTIFACT_EXTENSION}", self.0)
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-chart presentation switches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ChartOptions {
    /// Least-squares line per suite (line and scatter).
    pub trend_line: bool,
    /// One segment per iteration instead of the mean (bar).
    pub stacked: bool,
    /// Order bars by ascending mean (bar).
    pub sort_values: bool,
    pub horizontal: bool,
    /// Per-suite marker shapes (line).
    pub markers: bool,
    /// Shade the area under each line (line).
    pub fill: bool,
    /// Offset slices from the center (pie).
    pub explode: bool,
    /// Print each slice's percentage (pie).
    pub percentage: bool,
    pub bins: usize,
    /// Overlay a kernel density curve (histogram).
    pub kde: bool,
    /// Metric scaling point size (scatter).
    pub size_metric: Option<String>,
    pub title: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            trend_line: false,
            stacked: false,
            sort_values: false,
            horizontal: false,
            markers: true,
            fill: false,
            explode: false,
            percentage: true,
            bins: DEFAULT_HISTOGRAM_BINS,
            kde: false,
            size_metric: None,
            title: None,
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub const fn with_trend_line(mut self, enabled: bool) -> Self {
        self.trend_line = enabled;
        self
    }

    #[must_use]
    pub const fn with_stacked(mut self, enabled: bool) -> Self {
        self.stacked = enabled;
        self
    }

    #[must_use]
    pub const fn with_sort_values(mut self, enabled: bool) -> Self {
        self.sort_values = enabled;
        self
    }

    #[must_use]
    pub const fn with_horizontal(mut self, enabled: bool) -> Self {
        self.horizontal = enabled;
        self
    }

    #[must_use]
    pub const fn with_markers(mut self, enabled: bool) -> Self {
        self.markers = enabled;
        self
    }

    #[must_use]
    pub const fn with_fill(mut self, enabled: bool) -> Self {
        self.fill = enabled;
        self
    }

    #[must_use]
    pub const fn with_explode(mut self, enabled: bool) -> Self {
        self.explode = enabled;
        self
    }

    #[must_use]
    pub const fn with_percentage(mut self, enabled: bool) -> Self {
        self.percentage = enabled;
        self
    }

    #[must_use]
    pub const fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    #[must_use]
    pub const fn with_kde(mut self, enabled: bool) -> Self {
        self.kde = enabled;
        self
    }

    #[must_use]
    pub fn with_size_metric(mut self, metric: impl Into<String>) -> Self {
        self.size_metric = Some(metric.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Immutable description of one chart job.
///
/// `metrics` holds one metric for bar, line, pie and histogram, `[x, y]` for
/// scatter, and the column list for heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    kind: ChartKind,
    metrics: Vec<String>,
    suites: Option<Vec<String>>,
    style: Option<StyleContext>,
    options: ChartOptions,
}

impl ChartSpec {
    fn single(kind: ChartKind, metric: impl Into<String>) -> Self {
        Self {
            kind,
            metrics: vec![metric.into()],
            suites: None,
            style: None,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn bar(metric: impl Into<String>) -> Self {
        Self::single(ChartKind::Bar, metric)
    }

    #[must_use]
    pub fn line(metric: impl Into<String>) -> Self {
        Self::single(ChartKind::Line, metric)
    }

    #[must_use]
    pub fn pie(metric: impl Into<String>) -> Self {
        Self::single(ChartKind::Pie, metric)
    }

    #[must_use]
    pub fn histogram(metric: impl Into<String>) -> Self {
        Self::single(ChartKind::Histogram, metric)
    }

    #[must_use]
    pub fn scatter(x_metric: impl Into<String>, y_metric: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Scatter,
            metrics: vec![x_metric.into(), y_metric.into()],
            suites: None,
            style: None,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn heatmap(metrics: Vec<String>) -> Self {
        Self {
            kind: ChartKind::Heatmap,
            metrics,
            suites: None,
            style: None,
            options: ChartOptions::default(),
        }
    }

    /// Restrict the chart to these suites, in this order.
    #[must_use]
    pub fn with_suites(mut self, suites: Vec<String>) -> Self {
        self.suites = Some(suites);
        self
    }

    /// Override the batch style for this chart only.
    #[must_use]
    pub fn with_style(mut self, style: StyleContext) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// First metric; the x metric for scatter charts.
    #[must_use]
    pub fn metric(&self) -> &str {
        self.metrics.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn suites(&self) -> Option<&[String]> {
        self.suites.as_deref()
    }

    #[must_use]
    pub const fn style(&self) -> Option<&StyleContext> {
        self.style.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Identity derived from kind, metrics and suite subset.
    ///
    /// The readable stem is kept as is when it can be read back unambiguously.
    /// Otherwise (characters replaced, or a joined part that itself contains
    /// `_`) a short digest of the raw identity is appended, so distinct specs
    /// never share an id.
    #[must_use]
    pub fn id(&self) -> ChartId {
        let mut stem = match self.kind {
            ChartKind::Scatter => {
                let x = self.metrics.first().map_or("", String::as_str);
                let y = self.metrics.get(1).map_or("", String::as_str);
                format!("{y}_vs_{x}_scatter")
            }
            ChartKind::Heatmap if self.metrics.is_empty() => "heatmap".to_string(),
            ChartKind::Heatmap => format!("{}_heatmap", self.metrics.join("_")),
            kind => format!("{}_{kind}", self.metric()),
        };

        if let Some(suites) = &self.suites {
            stem.push_str("__");
            stem.push_str(&suites.join("_"));
        }

        let cleaned = sanitize_stem(&stem);
        if cleaned == stem && !self.has_ambiguous_parts() {
            return ChartId(cleaned);
        }
        ChartId(format!("{cleaned}-{}", self.identity_digest()))
    }

    /// Whether joining the parts with `_` could merge two different specs.
    fn has_ambiguous_parts(&self) -> bool {
        let suites = self.suites.as_deref().unwrap_or_default();
        let parts = self.metrics.len() + suites.len();
        parts > 1
            && self
                .metrics
                .iter()
                .chain(suites)
                .any(|part| part.is_empty() || part.contains('_'))
    }

    /// First 8 hex digits of a SHA-256 over the unsanitized identity.
    fn identity_digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.kind.as_str().as_bytes());
        hasher.update((self.metrics.len() as u64).to_le_bytes());
        for metric in &self.metrics {
            hasher.update((metric.len() as u64).to_le_bytes());
            hasher.update(metric.as_bytes());
        }
        match &self.suites {
            None => hasher.update([0u8]),
            Some(suites) => {
                hasher.update([1u8]);
                hasher.update((suites.len() as u64).to_le_bytes());
                for suite in suites {
                    hasher.update((suite.len() as u64).to_le_bytes());
                    hasher.update(suite.as_bytes());
                }
            }
        }
        let digest = format!("{:x}", hasher.finalize());
        digest[..8].to_string()
    }

    /// Default chart title when none is set in the options.
    #[must_use]
    pub fn title(&self) -> String {
        if let Some(title) = &self.options.title {
            return title.clone();
        }
        let metric = self.metric();
        match self.kind {
            ChartKind::Bar => format!("Average {metric} by Suite"),
            ChartKind::Line => format!("{metric} Over Iterations"),
            ChartKind::Scatter => {
                let y = self.metrics.get(1).map_or("", String::as_str);
                format!("{y} vs {metric}")
            }
            ChartKind::Pie => format!("Distribution of {metric} by Suite"),
            ChartKind::Histogram => format!("Distribution of {metric}"),
            ChartKind::Heatmap => "Performance Metrics Heatmap".to_string(),
        }
    }
}

/// Replace anything outside `[A-Za-z0-9._-]` with `_`.
fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "chart".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
