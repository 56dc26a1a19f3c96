use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::chart::ChartSpec;
use crate::cli::{ChartArgs, Cli};
use crate::dataset::Dataset;
use crate::orchestrator::{BatchOutcome, BatchProgress, Orchestrator};
use crate::render::SvgRenderer;
use crate::report::{HtmlReportAssembler, ReportAssembler, StatsByMetric};
use crate::stats::StatisticsCache;
use crate::{EXIT_CHART_FAILURES, EXIT_INPUT_ERROR, EXIT_SUCCESS};

use super::context::{ChartContext, ensure_dir, load_config, load_input};

const DEFAULT_CHARTS_DIR: &str = "charts";
const DEFAULT_REPORT_DIR: &str = "report";
const REPORT_CHARTS_SUBDIR: &str = "charts";

#[must_use]
pub fn run_charts(args: &ChartArgs, cli: &Cli) -> i32 {
    match run_charts_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_INPUT_ERROR
        }
    }
}

#[must_use]
pub fn run_report(args: &ChartArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_INPUT_ERROR
        }
    }
}

/// Render the requested charts into the output directory.
///
/// # Errors
/// Returns load, validation, and configuration errors. Chart job failures
/// are reported and turned into exit code 1 instead.
pub fn run_charts_impl(args: &ChartArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    let dataset = load_input(&args.input)?;
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHARTS_DIR));

    let context = ChartContext::from_args(args, &config, &dataset, out_dir.clone())?;
    let cache = StatisticsCache::new(context.cache_capacity);
    let outcome = run_batch(&dataset, &cache, &context, cli.quiet)?;

    print_summary(&outcome, &out_dir, cli.quiet);
    Ok(exit_code(&outcome))
}

/// Render every requested chart into `<out-dir>/charts`, then write
/// `<out-dir>/report.html`.
///
/// # Errors
/// Same as [`run_charts_impl`], plus failure to write the report.
pub fn run_report_impl(args: &ChartArgs, cli: &Cli) -> crate::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?.config;
    let dataset = load_input(&args.input)?;
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_DIR));

    let context = ChartContext::from_args(
        args,
        &config,
        &dataset,
        out_dir.join(REPORT_CHARTS_SUBDIR),
    )?;
    let cache = StatisticsCache::new(context.cache_capacity);
    let outcome = run_batch(&dataset, &cache, &context, cli.quiet)?;

    let stats = collect_stats(&dataset, &cache, context.builder.metrics());
    let report_path = HtmlReportAssembler::new()
        .with_dark_mode(context.style.dark_mode())
        .with_fingerprint(dataset.fingerprint().short())
        .assemble(&outcome, &stats, &out_dir)?;

    print_summary(&outcome, &out_dir.join(REPORT_CHARTS_SUBDIR), cli.quiet);
    if !cli.quiet {
        println!("Report generated: {}", report_path.display());
    }
    Ok(exit_code(&outcome))
}

fn run_batch(
    dataset: &Dataset,
    cache: &StatisticsCache,
    context: &ChartContext,
    quiet: bool,
) -> crate::Result<BatchOutcome> {
    let specs: Vec<ChartSpec> = context.builder.build();
    ensure_dir(&context.batch.output_dir)?;

    let progress = BatchProgress::new(specs.len() as u64, quiet);
    let orchestrator = Orchestrator::new(dataset, cache, &SvgRenderer, context.batch.clone());
    let outcome = orchestrator.run_with_progress(specs, &progress);
    progress.finish();

    let stats = cache.stats();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        computations = stats.computations,
        evictions = stats.evictions,
        "statistics cache"
    );
    outcome
}

/// Statistics for every requested metric the dataset actually has.
fn collect_stats(dataset: &Dataset, cache: &StatisticsCache, metrics: &[String]) -> StatsByMetric {
    let mut stats = StatsByMetric::new();
    for metric in metrics {
        match cache.get_or_compute(dataset, metric) {
            Ok(summary) => {
                stats.insert(metric.clone(), Arc::clone(&summary));
            }
            Err(e) => tracing::warn!(metric, error = %e, "no statistics for report"),
        }
    }
    stats
}

fn print_summary(outcome: &BatchOutcome, out_dir: &Path, quiet: bool) {
    if !quiet {
        println!(
            "Generated {} chart(s) in {}",
            outcome.successes.len(),
            out_dir.display()
        );
    }
    if !outcome.failures.is_empty() {
        eprintln!(
            "{} succeeded, {} failed",
            outcome.successes.len(),
            outcome.failures.len()
        );
        for failure in &outcome.failures {
            eprintln!("  {}: {}", failure.id, failure.error);
        }
    }
    if !outcome.cancelled.is_empty() {
        eprintln!("{} chart(s) cancelled", outcome.cancelled.len());
    }
}

fn exit_code(outcome: &BatchOutcome) -> i32 {
    if outcome.failures.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_CHART_FAILURES
    }
}
