use indexmap::IndexMap;

use super::{Dataset, metric_exists};
use crate::{PerfChartsError, Result};

/// One metric's values per suite, in iteration order.
///
/// Every series is non-empty and as long as its suite.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    metric: String,
    series: IndexMap<String, Vec<f64>>,
}

impl MetricSeries {
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Suite names in series order.
    pub fn suites(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    #[must_use]
    pub fn values(&self, suite: &str) -> Option<&[f64]> {
        self.series.get(suite).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// All values concatenated in suite order.
    #[must_use]
    pub fn all_values(&self) -> Vec<f64> {
        self.series.values().flatten().copied().collect()
    }

    #[must_use]
    pub fn suite_count(&self) -> usize {
        self.series.len()
    }

    /// Mean per suite, in suite order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn means(&self) -> Vec<f64> {
        self.series
            .values()
            .map(|v| v.iter().sum::<f64>() / v.len() as f64)
            .collect()
    }
}

/// Extract `metric` for `suites` (every suite when `None`), keeping the order given.
///
/// # Errors
/// - `MetricNotFound` if the metric is not discoverable in the dataset
/// - `SuiteNotFound` if a requested suite does not exist
/// - `Schema` if a selected suite's schema lacks the metric
pub fn extract_series(
    dataset: &Dataset,
    metric: &str,
    suites: Option<&[String]>,
) -> Result<MetricSeries> {
    metric_exists(dataset, metric)?;

    let selected: Vec<&str> = match suites {
        Some(names) => names.iter().map(String::as_str).collect(),
        None => dataset.suite_names().collect(),
    };

    let mut series = IndexMap::with_capacity(selected.len());
    for suite in selected {
        let points = dataset
            .suite(suite)
            .ok_or_else(|| PerfChartsError::SuiteNotFound(suite.to_string()))?;

        // Schemas are uniform within a suite, so the first point decides.
        let values = points
            .iter()
            .map(|p| p.get(metric))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| PerfChartsError::Schema {
                suite: suite.to_string(),
                index: 0,
                reason: format!("suite has no metric '{metric}'"),
            })?;
        series.insert(suite.to_string(), values);
    }

    Ok(MetricSeries {
        metric: metric.to_string(),
        series,
    })
}

#[cfg(test)]
#[path = "metric_tests.rs"]
mod tests;
