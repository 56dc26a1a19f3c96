use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use super::{DataPoint, Dataset};
use crate::{PerfChartsError, Result};

/// Load a JSON file and validate it into a [`Dataset`].
///
/// # Errors
/// Returns `FileRead` if the file cannot be read, `JsonParse` if it is not
/// valid JSON, and any error [`validate`] reports.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path).map_err(|source| PerfChartsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&content, path)?;

    tracing::info!(
        path = %path.display(),
        suites = dataset.suite_count(),
        points = dataset.point_count(),
        fingerprint = dataset.fingerprint().short(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse JSON text and validate it. `origin` is only used in error messages.
///
/// # Errors
/// Returns `JsonParse` for malformed JSON, otherwise see [`validate`].
pub fn parse_dataset(content: &str, origin: &Path) -> Result<Dataset> {
    let raw: Value = serde_json::from_str(content).map_err(|source| PerfChartsError::JsonParse {
        path: origin.to_path_buf(),
        source,
    })?;
    validate(&raw)
}

/// Structurally validate raw input.
///
/// Point indices in errors are 1-based: the second point of a suite is index 2.
///
/// # Errors
/// - `InvalidRoot` if the root is not an object of arrays
/// - `EmptyDataset` if the root object has no suites
/// - `Schema` naming suite and index for empty suites, non-object points,
///   non-numeric fields, and key sets differing from the suite's first point
pub fn validate(raw: &Value) -> Result<Dataset> {
    let Value::Object(root) = raw else {
        return Err(PerfChartsError::InvalidRoot(format!(
            "root must be an object of suite arrays, found {}",
            value_kind(raw)
        )));
    };

    if root.is_empty() {
        return Err(PerfChartsError::EmptyDataset);
    }

    let mut suites = IndexMap::with_capacity(root.len());
    for (suite_name, suite_value) in root {
        let points = validate_suite(suite_name, suite_value)?;
        suites.insert(suite_name.clone(), points);
    }

    Ok(Dataset::from_validated(suites))
}

fn validate_suite(suite: &str, value: &Value) -> Result<Vec<DataPoint>> {
    let Value::Array(items) = value else {
        return Err(schema_error(
            suite,
            0,
            format!("suite must be an array of points, found {}", value_kind(value)),
        ));
    };

    if items.is_empty() {
        return Err(schema_error(suite, 0, "suite has no data points"));
    }

    let mut points: Vec<DataPoint> = Vec::with_capacity(items.len());
    for (offset, item) in items.iter().enumerate() {
        let index = offset + 1;
        let point = validate_point(suite, index, item)?;

        if let Some(first) = points.first()
            && !first.same_schema(&point)
        {
            return Err(schema_error(
                suite,
                index,
                format!(
                    "keys [{}] differ from the suite's first point [{}]",
                    join_keys(&point),
                    join_keys(first)
                ),
            ));
        }
        points.push(point);
    }

    Ok(points)
}

fn validate_point(suite: &str, index: usize, item: &Value) -> Result<DataPoint> {
    let Value::Object(fields) = item else {
        return Err(schema_error(
            suite,
            index,
            format!("point must be an object, found {}", value_kind(item)),
        ));
    };

    let mut values = IndexMap::with_capacity(fields.len());
    for (metric, value) in fields {
        let number = value.as_f64().filter(|n| n.is_finite()).ok_or_else(|| {
            schema_error(
                suite,
                index,
                format!("field '{metric}' is not numeric ({})", value_kind(value)),
            )
        })?;
        values.insert(metric.clone(), number);
    }

    Ok(DataPoint::new(values))
}

/// Check that `metric` is discoverable in the dataset.
///
/// # Errors
/// Returns `MetricNotFound` listing every discoverable metric.
pub fn metric_exists(dataset: &Dataset, metric: &str) -> Result<()> {
    if dataset.has_metric(metric) {
        Ok(())
    } else {
        Err(PerfChartsError::MetricNotFound {
            metric: metric.to_string(),
            available: dataset.metrics().to_vec(),
        })
    }
}

fn schema_error(suite: &str, index: usize, reason: impl Into<String>) -> PerfChartsError {
    PerfChartsError::Schema {
        suite: suite.to_string(),
        index,
        reason: reason.into(),
    }
}

fn join_keys(point: &DataPoint) -> String {
    let mut keys: Vec<&str> = point.metrics().collect();
    keys.sort_unstable();
    keys.join(", ")
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
