use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use esg_benchmark_core::benchmark;
use esg_benchmark_core::company::CompanyRecord;

use crate::input;

/// Input shape for the `benchmark` command.
#[derive(Deserialize)]
struct BenchmarkInput {
    company: CompanyRecord,
    #[serde(default)]
    peers: Vec<CompanyRecord>,
}

/// Input shape for the company-set commands.
#[derive(Deserialize)]
struct CompanySetInput {
    companies: Vec<CompanyRecord>,
    #[serde(default)]
    sector: Option<String>,
}

/// Arguments for the full company benchmark
#[derive(Args)]
pub struct BenchmarkArgs {
    /// Path to JSON input file ({"company": {...}, "peers": [...]})
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for sector statistics
#[derive(Args)]
pub struct SectorStatsArgs {
    /// Path to JSON input file ({"companies": [...], "sector": "..."})
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the peer heatmap
#[derive(Args)]
pub struct HeatmapArgs {
    /// Path to JSON input file ({"companies": [...]})
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for single-metric ranking
#[derive(Args)]
pub struct RankingArgs {
    /// Path to JSON input file ({"companies": [...]})
    #[arg(long)]
    pub input: Option<String>,

    /// Catalog key of the metric to rank on (e.g. scope_1)
    #[arg(long)]
    pub metric: String,
}

fn read_input<T: serde::de::DeserializeOwned>(
    path: &Option<String>,
    usage: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err(format!("--input <file.json> or stdin required for {}", usage).into())
    }
}

pub fn run_benchmark(args: BenchmarkArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: BenchmarkInput = read_input(&args.input, "benchmark")?;
    let result = benchmark::company_benchmark(&input.company, &input.peers)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_sector_stats(args: SectorStatsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: CompanySetInput = read_input(&args.input, "sector-stats")?;
    let result = benchmark::sector_stats(&input.companies, input.sector.as_deref())?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_heatmap(args: HeatmapArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: CompanySetInput = read_input(&args.input, "heatmap")?;
    let result = benchmark::heatmap(&input.companies)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_ranking(args: RankingArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: CompanySetInput = read_input(&args.input, "ranking")?;
    let result = benchmark::metric_ranking(&input.companies, &args.metric)?;
    Ok(serde_json::to_value(result)?)
}
