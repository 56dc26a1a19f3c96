use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithms::DEFAULT_HISTOGRAM_BINS;
use crate::chart::{
    DEFAULT_CANVAS, DEFAULT_DPI, DEFAULT_METRIC_COUNT, FALLBACK_METRICS, StyleContext, Theme,
};
use crate::orchestrator::{DEFAULT_JOB_TIMEOUT, DEFAULT_WORKERS};
use crate::stats::DEFAULT_CACHE_CAPACITY;
use crate::{PerfChartsError, Result};

/// Root of `.perf-charts.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub batch: BatchSettings,

    #[serde(default)]
    pub charts: ChartsConfig,
}

impl Config {
    /// Reject values the rest of the pipeline cannot honor.
    ///
    /// # Errors
    /// Returns `Config` for zero bins or metric count, and `InvalidStyle`
    /// for an out-of-range DPI or canvas.
    pub fn validate(&self) -> Result<()> {
        if self.charts.histogram_bins == 0 {
            return Err(PerfChartsError::Config(
                "charts.histogram_bins must be at least 1".to_string(),
            ));
        }
        if self.charts.default_metric_count == 0 {
            return Err(PerfChartsError::Config(
                "charts.default_metric_count must be at least 1".to_string(),
            ));
        }
        self.style.to_style_context().map(|_| ())
    }
}

/// `[style]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Width and height in inches.
    #[serde(default = "default_canvas")]
    pub canvas: [f64; 2],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            dark_mode: false,
            dpi: default_dpi(),
            canvas: default_canvas(),
        }
    }
}

impl StyleConfig {
    /// # Errors
    /// Returns `InvalidStyle` if the DPI or canvas is out of range.
    pub fn to_style_context(&self) -> Result<StyleContext> {
        let [width, height] = self.canvas;
        StyleContext::new(self.theme, self.dark_mode, self.dpi, (width, height))
    }
}

/// `[batch]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BatchSettings {
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-job limit in seconds; 0 disables it.
    #[serde(default = "default_job_timeout_secs")]
    pub job_timeout_secs: u64,

    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            job_timeout_secs: default_job_timeout_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl BatchSettings {
    #[must_use]
    pub const fn job_timeout(&self) -> Option<Duration> {
        if self.job_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.job_timeout_secs))
        }
    }
}

/// `[charts]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChartsConfig {
    #[serde(default)]
    pub trend_line: bool,

    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Discovered metrics charted when none are requested.
    #[serde(default = "default_metric_count")]
    pub default_metric_count: usize,

    /// Charted when the dataset exposes no metrics at all.
    #[serde(default = "default_fallback_metrics")]
    pub fallback_metrics: Vec<String>,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            trend_line: false,
            histogram_bins: default_histogram_bins(),
            default_metric_count: default_metric_count(),
            fallback_metrics: default_fallback_metrics(),
        }
    }
}

const fn default_dpi() -> u32 {
    DEFAULT_DPI
}

const fn default_canvas() -> [f64; 2] {
    [DEFAULT_CANVAS.0, DEFAULT_CANVAS.1]
}

const fn default_workers() -> usize {
    DEFAULT_WORKERS
}

const fn default_job_timeout_secs() -> u64 {
    DEFAULT_JOB_TIMEOUT.as_secs()
}

const fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

const fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

const fn default_metric_count() -> usize {
    DEFAULT_METRIC_COUNT
}

fn default_fallback_metrics() -> Vec<String> {
    FALLBACK_METRICS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
