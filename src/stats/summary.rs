use indexmap::IndexMap;
use serde::Serialize;

use crate::dataset::MetricSeries;

/// min/max/avg/std/count of one (suite, metric) pair.
///
/// `std` is the population standard deviation; it is exactly 0 for one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub std: f64,
    pub count: usize,
}

impl StatSummary {
    /// Summarize a non-empty slice. Returns `None` for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let count = values.len();
        let n = count as f64;
        // Rounding can push the mean a hair outside [min, max] for constant data.
        let avg = (values.iter().sum::<f64>() / n).clamp(min, max);

        let std = if count == 1 {
            0.0
        } else {
            let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;
            variance.sqrt()
        };

        Some(Self {
            min,
            max,
            avg,
            std,
            count,
        })
    }
}

/// Statistics of one metric for every suite of a dataset, in suite order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricStatistics {
    pub metric: String,
    pub by_suite: IndexMap<String, StatSummary>,
}

impl MetricStatistics {
    /// Summarize an extracted series. Suites with no values are skipped,
    /// which a validated dataset never produces.
    #[must_use]
    pub fn from_series(series: &MetricSeries) -> Self {
        let by_suite = series
            .iter()
            .filter_map(|(suite, values)| {
                StatSummary::from_values(values).map(|s| (suite.to_string(), s))
            })
            .collect();
        Self {
            metric: series.metric().to_string(),
            by_suite,
        }
    }

    #[must_use]
    pub fn get(&self, suite: &str) -> Option<&StatSummary> {
        self.by_suite.get(suite)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
