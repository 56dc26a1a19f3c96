use std::fmt::Write;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::cli::{Cli, StatsArgs, StatsFormat};
use crate::stats::{MetricStatistics, StatSummary, StatisticsCache};
use crate::{EXIT_INPUT_ERROR, EXIT_SUCCESS};

use super::context::load_input;

#[must_use]
pub fn run_stats(args: &StatsArgs, cli: &Cli) -> i32 {
    match run_stats_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_INPUT_ERROR
        }
    }
}

/// Print per-suite statistics for the requested metrics (all by default).
///
/// # Errors
/// Returns load and validation errors, `MetricNotFound` for an unknown
/// metric, and `Cache` when a metric cannot be summarized.
pub fn run_stats_impl(args: &StatsArgs, _cli: &Cli) -> crate::Result<i32> {
    let dataset = load_input(&args.input)?;
    let metrics: Vec<String> = if args.metrics.is_empty() {
        dataset.metrics().to_vec()
    } else {
        args.metrics.clone()
    };

    let cache = StatisticsCache::new(metrics.len());
    let mut all = Vec::with_capacity(metrics.len());
    for metric in &metrics {
        all.push(cache.get_or_compute(&dataset, metric)?);
    }

    let output = match args.format {
        StatsFormat::Text => format_stats_text(&all),
        StatsFormat::Json => format_stats_json(&all)?,
    };
    println!("{output}");
    Ok(EXIT_SUCCESS)
}

/// One aligned table per metric.
#[must_use]
pub fn format_stats_text(all: &[Arc<MetricStatistics>]) -> String {
    let mut output = String::new();
    for (i, stats) in all.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let width = stats
            .by_suite
            .keys()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max("Suite".len());

        let _ = writeln!(output, "{}", stats.metric);
        let _ = writeln!(
            output,
            "  {:<width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>6}",
            "Suite", "Min", "Max", "Avg", "Std Dev", "Count"
        );
        for (suite, summary) in &stats.by_suite {
            let StatSummary {
                min,
                max,
                avg,
                std,
                count,
            } = *summary;
            let _ = writeln!(
                output,
                "  {suite:<width$}  {min:>12.2}  {max:>12.2}  {avg:>12.2}  {std:>12.2}  {count:>6}"
            );
        }
    }
    output.truncate(output.trim_end().len());
    output
}

/// `{ metric: { suite: { min, max, avg, std, count } } }`
///
/// # Errors
/// Returns `JsonSerialize` if serialization fails.
pub fn format_stats_json(all: &[Arc<MetricStatistics>]) -> crate::Result<String> {
    let by_metric: IndexMap<&str, &IndexMap<String, StatSummary>> = all
        .iter()
        .map(|stats| (stats.metric.as_str(), &stats.by_suite))
        .collect();
    Ok(serde_json::to_string_pretty(&by_metric)?)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
