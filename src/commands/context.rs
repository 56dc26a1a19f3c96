use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chart::{ChartOptions, ChartSpecBuilder, StyleContext, default_metrics};
use crate::cli::ChartArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::dataset::{Dataset, load_dataset, metric_exists};
use crate::orchestrator::BatchConfig;
use crate::{PerfChartsError, Result};

/// Load configuration unless `--no-config` was given.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed, or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Load and validate the dataset at `input`.
///
/// # Errors
/// Returns the read, parse, or validation error.
pub(crate) fn load_input(input: &Path) -> Result<Dataset> {
    let shown = dunce::canonicalize(input).unwrap_or_else(|_| input.to_path_buf());
    tracing::debug!(input = %shown.display(), "loading dataset");
    load_dataset(input)
}

/// Requested metrics, or the configured default selection when none were given.
///
/// Explicitly requested metrics must exist; the defaults are not checked so a
/// dataset without metrics still produces (failing) jobs for the fallback set.
///
/// # Errors
/// Returns `MetricNotFound` for the first requested metric that is missing.
pub(crate) fn resolve_metrics(
    dataset: &Dataset,
    requested: &[String],
    config: &Config,
) -> Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(default_metrics(
            dataset,
            config.charts.default_metric_count,
            &config.charts.fallback_metrics,
        ));
    }

    for metric in requested {
        metric_exists(dataset, metric)?;
    }
    Ok(requested.to_vec())
}

/// Everything a chart batch needs, resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct ChartContext {
    pub style: StyleContext,
    pub batch: BatchConfig,
    pub builder: ChartSpecBuilder,
    pub cache_capacity: usize,
}

impl ChartContext {
    /// CLI flags override config values.
    ///
    /// # Errors
    /// Returns `InvalidStyle` for an out-of-range DPI, `MetricNotFound` for
    /// unknown requested or scatter metrics.
    pub fn from_args(
        args: &ChartArgs,
        config: &Config,
        dataset: &Dataset,
        output_dir: PathBuf,
    ) -> Result<Self> {
        let mut style_config = config.style.clone();
        if let Some(style) = args.style {
            style_config.theme = style.into();
        }
        if args.dark_mode {
            style_config.dark_mode = true;
        }
        if let Some(dpi) = args.dpi {
            style_config.dpi = dpi;
        }
        let style = style_config.to_style_context()?;

        let timeout = match args.timeout {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => config.batch.job_timeout(),
        };
        let batch = BatchConfig::new(output_dir)
            .with_workers(args.jobs.unwrap_or(config.batch.workers))
            .with_job_timeout(timeout)
            .with_style(style.clone());

        let options = ChartOptions::default()
            .with_trend_line(args.trend_line || config.charts.trend_line)
            .with_stacked(args.stacked)
            .with_kde(args.kde)
            .with_bins(args.bins.map_or(config.charts.histogram_bins, usize::from));

        let metrics = resolve_metrics(dataset, &args.metrics, config)?;
        let mut builder = ChartSpecBuilder::new(metrics)
            .with_selection(args.chart_type.selection())
            .with_options(options);
        if let Some([x, y]) = args.scatter_metrics.as_deref() {
            metric_exists(dataset, x)?;
            metric_exists(dataset, y)?;
            builder = builder.with_scatter_pair(x.clone(), y.clone());
        }
        if !args.suites.is_empty() {
            for suite in &args.suites {
                if dataset.suite(suite).is_none() {
                    return Err(PerfChartsError::SuiteNotFound(suite.clone()));
                }
            }
            builder = builder.with_suites(args.suites.clone());
        }

        Ok(Self {
            style,
            batch,
            builder,
            cache_capacity: config.batch.cache_capacity,
        })
    }
}

/// Create `dir` (and parents) if missing.
///
/// # Errors
/// Returns `Io` if the directory cannot be created.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
