//! Immutable, validated benchmark dataset.
//!
//! A [`Dataset`] can only be obtained through [`validate`] (or [`load_dataset`]),
//! so every instance upholds the structural invariants: at least one suite,
//! every suite non-empty, and one key set shared by all points of a suite.

mod fingerprint;
mod metric;
mod validate;

use indexmap::IndexMap;

pub use fingerprint::Fingerprint;
pub use metric::{MetricSeries, extract_series};
pub use validate::{load_dataset, metric_exists, parse_dataset, validate};

/// One iteration record: metric name to numeric value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataPoint {
    values: IndexMap<String, f64>,
}

impl DataPoint {
    #[must_use]
    pub const fn new(values: IndexMap<String, f64>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }

    pub fn metrics(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Same key set as `other`, ignoring key order.
    #[must_use]
    pub fn same_schema(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self.values.keys().all(|k| other.values.contains_key(k))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for DataPoint {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Validated suites in input order.
#[derive(Debug, Clone)]
pub struct Dataset {
    suites: IndexMap<String, Vec<DataPoint>>,
    fingerprint: Fingerprint,
    metrics: Vec<String>,
}

impl Dataset {
    /// Wrap suites that already passed validation.
    fn from_validated(suites: IndexMap<String, Vec<DataPoint>>) -> Self {
        let fingerprint = Fingerprint::of_suites(&suites);
        let metrics = discover_metrics(&suites);
        Self {
            suites,
            fingerprint,
            metrics,
        }
    }

    /// Content fingerprint, stable across loads of identical data.
    #[must_use]
    pub const fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Metrics discoverable from the first point of the first suite, sorted by name.
    #[must_use]
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    #[must_use]
    pub fn has_metric(&self, metric: &str) -> bool {
        self.metrics.iter().any(|m| m == metric)
    }

    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.suites.keys().map(String::as_str)
    }

    pub fn suites(&self) -> impl Iterator<Item = (&str, &[DataPoint])> {
        self.suites.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn suite(&self, name: &str) -> Option<&[DataPoint]> {
        self.suites.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    /// Total number of points across all suites.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.suites.values().map(Vec::len).sum()
    }
}

fn discover_metrics(suites: &IndexMap<String, Vec<DataPoint>>) -> Vec<String> {
    let mut metrics: Vec<String> = suites
        .values()
        .find_map(|points| points.first())
        .map(|first| first.metrics().map(str::to_string).collect())
        .unwrap_or_default();
    metrics.sort();
    metrics
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
