use crate::cli::{Cli, MetricsArgs};
use crate::{EXIT_INPUT_ERROR, EXIT_SUCCESS};

use super::context::load_input;

#[must_use]
pub fn run_metrics(args: &MetricsArgs, cli: &Cli) -> i32 {
    match run_metrics_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_INPUT_ERROR
        }
    }
}

/// Print the dataset's metrics, one per line.
///
/// # Errors
/// Returns load and validation errors.
pub fn run_metrics_impl(args: &MetricsArgs, cli: &Cli) -> crate::Result<i32> {
    let dataset = load_input(&args.input)?;
    println!("{}", format_metrics(dataset.metrics(), cli.quiet));
    Ok(EXIT_SUCCESS)
}

/// Metric list with a heading unless `quiet`.
#[must_use]
pub fn format_metrics(metrics: &[String], quiet: bool) -> String {
    if quiet {
        return metrics.join("\n");
    }
    if metrics.is_empty() {
        return "No metrics found.".to_string();
    }
    let mut output = String::from("Available metrics:");
    for metric in metrics {
        output.push_str("\n  ");
        output.push_str(metric);
    }
    output
}
