use clap::Parser;
use tracing_subscriber::EnvFilter;

use perf_charts::cli::{Cli, Commands};
use perf_charts::commands::{run_charts, run_metrics, run_report, run_stats};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Metrics(args) => run_metrics(args, &cli),
        Commands::Charts(args) => run_charts(args, &cli),
        Commands::Report(args) => run_report(args, &cli),
        Commands::Stats(args) => run_stats(args, &cli),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins; otherwise `-q` and `-v` pick the level.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("perf_charts={level}"))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
