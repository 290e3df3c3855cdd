//! The benchmark operation surface.
//!
//! Callers fetch a company and its sector peers from storage (external
//! collaborators), then hand the raw records to these entry points. Every
//! output is recomputed from scratch per call; nothing here is cached or
//! persisted.

use std::collections::BTreeMap;
use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_gaps, build_radar, classify, ClassifiedMetric, GapEntry, RadarPoint};
use crate::catalog::{all_keys, describe, MetricKey};
use crate::company::{enrich, CompanyRecord, EnrichedCompany};
use crate::error::EsgBenchError;
use crate::scoring::{normalize_score, percentile_rank, score_pillars, PillarScores};
use crate::stats::{aggregate, MetricStats};
use crate::types::{with_metadata, ComputationOutput};
use crate::EsgBenchResult;

// ---------------------------------------------------------------------------
// Company benchmark
// ---------------------------------------------------------------------------

/// The full request-scoped benchmark result for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkPayload {
    pub company: EnrichedCompany,
    pub pillar_scores: PillarScores,
    pub percentiles: BTreeMap<MetricKey, Option<u32>>,
    pub normalized_scores: BTreeMap<MetricKey, Option<Decimal>>,
    pub gap_analysis: BTreeMap<MetricKey, Option<GapEntry>>,
    pub radar: Vec<RadarPoint>,
    pub sector_stats: BTreeMap<MetricKey, MetricStats>,
    pub strengths: Vec<ClassifiedMetric>,
    pub weaknesses: Vec<ClassifiedMetric>,
    pub opportunities: Vec<ClassifiedMetric>,
    pub peer_count: usize,
}

fn validate_record(record: &CompanyRecord) -> EsgBenchResult<()> {
    if record.company_name.trim().is_empty() {
        return Err(EsgBenchError::InvalidInput {
            field: "company_name".into(),
            reason: "Company name must not be empty.".into(),
        });
    }
    if record.sector.trim().is_empty() {
        return Err(EsgBenchError::InvalidInput {
            field: "sector".into(),
            reason: "Sector must not be empty.".into(),
        });
    }
    Ok(())
}

/// Benchmark one company against its sector peers.
///
/// An empty or all-absent peer set is not an error: every percentile,
/// score, and gap degrades to absent and a warning is recorded.
pub fn company_benchmark(
    company: &CompanyRecord,
    peers: &[CompanyRecord],
) -> EsgBenchResult<ComputationOutput<BenchmarkPayload>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_record(company)?;

    if peers.is_empty() {
        warnings.push(format!(
            "No peers found in sector '{}'; all sector-relative results are absent.",
            company.sector
        ));
    }

    let agg = aggregate(peers);
    let company_enriched = enrich(company);

    let mut percentiles = BTreeMap::new();
    let mut normalized_scores = BTreeMap::new();
    for key in all_keys() {
        let desc = describe(*key);
        let peer_values: Vec<Option<Decimal>> =
            agg.enriched.iter().map(|c| c.metric(*key)).collect();
        percentiles.insert(
            *key,
            percentile_rank(company_enriched.metric(*key), &peer_values, desc.lower_is_better),
        );
        let normalized = agg.stats.get(key).and_then(|ms| {
            normalize_score(
                company_enriched.metric(*key),
                ms.min,
                ms.max,
                desc.lower_is_better,
            )
        });
        normalized_scores.insert(*key, normalized);
    }

    let pillar_scores = score_pillars(&company_enriched, &agg.stats);
    let gap_analysis = analyze_gaps(&company_enriched, &agg.enriched, &agg.stats);
    let radar = build_radar(&company_enriched, &agg.enriched, &agg.stats);
    let classification = classify(&percentiles);

    let payload = BenchmarkPayload {
        company: company_enriched,
        pillar_scores,
        percentiles,
        normalized_scores,
        gap_analysis,
        radar,
        sector_stats: agg.stats,
        strengths: classification.strengths,
        weaknesses: classification.weaknesses,
        opportunities: classification.opportunities,
        peer_count: peers.len(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "peer_grouping": "sector",
        "percentile_method": "competition ranking, ties averaged",
        "quantile_method": "linear interpolation, inclusive",
        "score_range": "0-100",
        "sector": company.sector,
    });

    Ok(with_metadata(
        "Sector-relative ESG benchmarking",
        &assumptions,
        warnings,
        elapsed,
        payload,
    ))
}

// ---------------------------------------------------------------------------
// Sector statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorStatsReport {
    pub sector: String,
    pub stats: BTreeMap<MetricKey, MetricStats>,
    pub count: usize,
}

/// Distribution statistics for a set of companies (one sector, or "All").
pub fn sector_stats(
    companies: &[CompanyRecord],
    sector: Option<&str>,
) -> EsgBenchResult<SectorStatsReport> {
    if companies.is_empty() {
        return Err(EsgBenchError::InsufficientData(
            "No companies to aggregate.".into(),
        ));
    }
    let agg = aggregate(companies);
    Ok(SectorStatsReport {
        sector: sector.unwrap_or("All").to_string(),
        stats: agg.stats,
        count: companies.len(),
    })
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub id: String,
    pub company_name: String,
    pub bse_code: Option<String>,
    /// Normalized 0-100 score per metric, null where undefined.
    pub scores: BTreeMap<MetricKey, Option<Decimal>>,
    /// The underlying raw values, null where not reported.
    pub raw_values: BTreeMap<MetricKey, Option<Decimal>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapReport {
    pub metrics: Vec<MetricKey>,
    pub data: Vec<HeatmapRow>,
}

/// Normalized scores for every company on every catalog metric, for a
/// peer heatmap view.
pub fn heatmap(companies: &[CompanyRecord]) -> EsgBenchResult<HeatmapReport> {
    if companies.is_empty() {
        return Err(EsgBenchError::InsufficientData(
            "No companies to aggregate.".into(),
        ));
    }
    let agg = aggregate(companies);

    let data = agg
        .enriched
        .iter()
        .map(|c| {
            let mut scores = BTreeMap::new();
            let mut raw_values = BTreeMap::new();
            for key in all_keys() {
                let desc = describe(*key);
                let score = agg.stats.get(key).and_then(|ms| {
                    normalize_score(c.metric(*key), ms.min, ms.max, desc.lower_is_better)
                });
                scores.insert(*key, score);
                raw_values.insert(*key, c.metric(*key));
            }
            HeatmapRow {
                id: c.record.id.clone(),
                company_name: c.record.company_name.clone(),
                bse_code: c.record.bse_code.clone(),
                scores,
                raw_values,
            }
        })
        .collect();

    Ok(HeatmapReport {
        metrics: all_keys().to_vec(),
        data,
    })
}

// ---------------------------------------------------------------------------
// Metric ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCompany {
    pub id: String,
    pub company_name: String,
    pub value: Decimal,
    pub percentile: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRankingReport {
    pub metric: MetricKey,
    pub label: String,
    pub unit: String,
    pub lower_is_better: bool,
    pub ranked: Vec<RankedCompany>,
}

/// Rank companies on a single metric, best first. The metric key arrives
/// as a string from the caller and unknown keys are rejected.
pub fn metric_ranking(
    companies: &[CompanyRecord],
    metric_key: &str,
) -> EsgBenchResult<MetricRankingReport> {
    let key = MetricKey::parse(metric_key)?;
    let desc = describe(key);

    let agg = aggregate(companies);
    let all_values: Vec<Option<Decimal>> = agg.enriched.iter().map(|c| c.metric(key)).collect();

    let mut ranked: Vec<RankedCompany> = agg
        .enriched
        .iter()
        .filter_map(|c| {
            let value = c.metric(key)?;
            Some(RankedCompany {
                id: c.record.id.clone(),
                company_name: c.record.company_name.clone(),
                value,
                percentile: percentile_rank(Some(value), &all_values, desc.lower_is_better),
            })
        })
        .collect();

    if desc.lower_is_better {
        ranked.sort_by(|a, b| a.value.cmp(&b.value));
    } else {
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
    }

    Ok(MetricRankingReport {
        metric: key,
        label: desc.label.to_string(),
        unit: desc.unit.to_string(),
        lower_is_better: desc.lower_is_better,
        ranked,
    })
}
