use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::chart::{ChartKind, ChartSelection, Theme};

/// Which charts to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ChartType {
    Bar,
    Line,
    Scatter,
    Pie,
    Histogram,
    Heatmap,
    /// Every chart type
    #[default]
    All,
}

impl ChartType {
    #[must_use]
    pub const fn selection(self) -> ChartSelection {
        match self {
            Self::Bar => ChartSelection::Only(ChartKind::Bar),
            Self::Line => ChartSelection::Only(ChartKind::Line),
            Self::Scatter => ChartSelection::Only(ChartKind::Scatter),
            Self::Pie => ChartSelection::Only(ChartKind::Pie),
            Self::Histogram => ChartSelection::Only(ChartKind::Histogram),
            Self::Heatmap => ChartSelection::Only(ChartKind::Heatmap),
            Self::All => ChartSelection::All,
        }
    }
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleChoice {
    Default,
    Seaborn,
    Ggplot,
    Minimal,
}

impl From<StyleChoice> for Theme {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Default => Self::Default,
            StyleChoice::Seaborn => Self::Seaborn,
            StyleChoice::Ggplot => Self::Ggplot,
            StyleChoice::Minimal => Self::Minimal,
        }
    }
}

/// Output format for the stats command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "perf-charts")]
#[command(author, version, about = "Charts, statistics and HTML reports for benchmark suites")]
#[command(long_about = "Turns a JSON file of repeated-run benchmark suites into SVG charts, \
    per-suite statistics, and an HTML report.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - One or more chart jobs failed\n  \
    2 - Input, validation, or configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the metrics found in a dataset
    Metrics(MetricsArgs),

    /// Render chart files
    Charts(ChartArgs),

    /// Render every chart plus an HTML report
    Report(ChartArgs),

    /// Print per-suite statistics
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// JSON dataset file
    pub input: PathBuf,
}

#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ChartArgs {
    /// JSON dataset file
    pub input: PathBuf,

    /// Metrics to chart (default: first discovered metrics)
    #[arg(short, long, num_args = 1..)]
    pub metrics: Vec<String>,

    /// Chart type to generate
    #[arg(long, value_enum, default_value = "all")]
    pub chart_type: ChartType,

    /// Plot Y against X in a single scatter chart
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub scatter_metrics: Option<Vec<String>>,

    /// Restrict charts to these suites
    #[arg(long, num_args = 1..)]
    pub suites: Vec<String>,

    /// Output directory (default: "charts", or "report" for the report command)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Visual theme (overrides config)
    #[arg(long, value_enum)]
    pub style: Option<StyleChoice>,

    /// Dark background
    #[arg(long)]
    pub dark_mode: bool,

    /// Add least-squares trend lines to line and scatter charts
    #[arg(long)]
    pub trend_line: bool,

    /// Stack bar segments per iteration instead of plotting means
    #[arg(long)]
    pub stacked: bool,

    /// Overlay a kernel density curve on histograms
    #[arg(long)]
    pub kde: bool,

    /// Histogram bin count (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub bins: Option<u16>,

    /// Output resolution in dots per inch (overrides config)
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Number of parallel chart jobs (overrides config)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Per-chart time limit in seconds, 0 for none (overrides config)
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// JSON dataset file
    pub input: PathBuf,

    /// Metrics to summarize (default: all)
    #[arg(short, long, num_args = 1..)]
    pub metrics: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: StatsFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
