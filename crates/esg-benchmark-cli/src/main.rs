mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::benchmark::{BenchmarkArgs, HeatmapArgs, RankingArgs, SectorStatsArgs};

/// Sector-relative ESG benchmarking
#[derive(Parser)]
#[command(
    name = "esgb",
    version,
    about = "Sector-relative ESG benchmarking calculations",
    long_about = "Benchmarks a company's raw ESG metrics against its sector peers: \
                  percentile ranks, normalized 0-100 scores, pillar scores, gap-to-leader \
                  analysis, radar coordinates, and strengths/weaknesses classification. \
                  All arithmetic uses decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full benchmark payload for one company against its sector peers
    Benchmark(BenchmarkArgs),
    /// Per-metric distribution statistics over a set of companies
    SectorStats(SectorStatsArgs),
    /// Normalized-score heatmap across companies and metrics
    Heatmap(HeatmapArgs),
    /// Rank companies on a single metric
    Ranking(RankingArgs),
    /// Print the metric catalog
    Catalog,
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

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Benchmark(args) => commands::benchmark::run_benchmark(args),
        Commands::SectorStats(args) => commands::benchmark::run_sector_stats(args),
        Commands::Heatmap(args) => commands::benchmark::run_heatmap(args),
        Commands::Ranking(args) => commands::benchmark::run_ranking(args),
        Commands::Catalog => commands::catalog::run_catalog(),
        Commands::Version => {
            println!("esgb {}", env!("CARGO_PKG_VERSION"));
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
