//! Subcommand entry points. Each `run_*` returns the process exit code.

pub mod charts;
pub mod context;
pub mod metrics;
pub mod stats;

pub use charts::{run_charts, run_charts_impl, run_report, run_report_impl};
pub use context::ChartContext;
pub use metrics::{format_metrics, run_metrics, run_metrics_impl};
pub use stats::{format_stats_json, format_stats_text, run_stats, run_stats_impl};
