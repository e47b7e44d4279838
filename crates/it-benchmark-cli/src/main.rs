mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::analysis::{AnalyzeArgs, DeriveArgs, PositionArgs};
use commands::catalog::{BenchmarksArgs, IndustriesArgs, SicArgs};

/// Benchmark IT spend and operations against industry quartile bands
#[derive(Parser)]
#[command(
    name = "itb",
    version,
    about = "Benchmark IT spend and operations against industry peers",
    long_about = "Derives comparable IT metrics from raw organizational inputs, positions \
                  each against per-industry quartile bands, and reports quartile, 0-100 \
                  score, delta versus median and narrative insight."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log debug detail to stderr (otherwise RUST_LOG, default warn)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full benchmark analysis and report
    Analyze(AnalyzeArgs),
    /// Show the comparable metrics derived from raw inputs
    Derive(DeriveArgs),
    /// Position a single metric value against its industry band
    Position(PositionArgs),
    /// List the industries in the benchmark catalog
    Industries(IndustriesArgs),
    /// Show the merged benchmark rows for an industry
    Benchmarks(BenchmarksArgs),
    /// Map a SIC code to a catalog industry
    Sic(SicArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analysis::run_analyze(args),
        Commands::Derive(args) => commands::analysis::run_derive(args),
        Commands::Position(args) => commands::analysis::run_position(args),
        Commands::Industries(args) => commands::catalog::run_industries(args),
        Commands::Benchmarks(args) => commands::catalog::run_benchmarks(args),
        Commands::Sic(args) => commands::catalog::run_sic(args),
        Commands::Version => {
            println!("itb {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
