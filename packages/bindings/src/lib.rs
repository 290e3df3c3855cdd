use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use esg_benchmark_core::benchmark;
use esg_benchmark_core::company::CompanyRecord;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[derive(Deserialize)]
struct BenchmarkInput {
    company: CompanyRecord,
    #[serde(default)]
    peers: Vec<CompanyRecord>,
}

#[derive(Deserialize)]
struct CompanySetInput {
    companies: Vec<CompanyRecord>,
    #[serde(default)]
    sector: Option<String>,
}

#[derive(Deserialize)]
struct RankingInput {
    companies: Vec<CompanyRecord>,
    metric: String,
}

#[napi]
pub fn company_benchmark(input_json: String) -> NapiResult<String> {
    let input: BenchmarkInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        benchmark::company_benchmark(&input.company, &input.peers).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sector_stats(input_json: String) -> NapiResult<String> {
    let input: CompanySetInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        benchmark::sector_stats(&input.companies, input.sector.as_deref()).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn heatmap(input_json: String) -> NapiResult<String> {
    let input: CompanySetInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = benchmark::heatmap(&input.companies).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn metric_ranking(input_json: String) -> NapiResult<String> {
    let input: RankingInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        benchmark::metric_ranking(&input.companies, &input.metric).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
