use std::path::PathBuf;

use thiserror::Error;

use crate::stats::CacheError;

#[derive(Error, Debug)]
pub enum PerfChartsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Structural problem in the input. `index` is 1-based; 0 means the suite itself.
    #[error("Schema error in suite '{suite}' at index {index}: {reason}")]
    Schema {
        suite: String,
        index: usize,
        reason: String,
    },

    #[error("Schema error: {0}")]
    InvalidRoot(String),

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Metric '{metric}' not found. Available metrics: {}", available.join(", "))]
    MetricNotFound {
        metric: String,
        available: Vec<String>,
    },

    #[error("Suite '{0}' not found in dataset")]
    SuiteNotFound(String),

    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    #[error("Cannot compute {chart}: {reason}")]
    Algorithm { chart: String, reason: String },

    #[error("Render failed for {path}")]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Renderer rejected {chart}: {reason}")]
    RenderRejected { chart: String, reason: String },

    #[error("Statistics cache error: {0}")]
    Cache(CacheError),

    #[error("No chart specs to run")]
    EmptySpecList,

    #[error("Chart '{0}' appears more than once in the batch")]
    DuplicateChart(String),

    #[error("Chart job took {elapsed_ms} ms, limit is {limit_ms} ms")]
    JobTimedOut { elapsed_ms: u128, limit_ms: u128 },

    #[error("Chart job panicked: {0}")]
    JobPanicked(String),

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl From<CacheError> for PerfChartsError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::MetricNotFound { metric, available } => {
                Self::MetricNotFound { metric, available }
            }
            other => Self::Cache(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PerfChartsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
