//! Gap-to-leader analysis, radar projection, and the
//! strengths/weaknesses/opportunities classification.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::catalog::{all_keys, describe, MetricKey, RADAR_KEYS};
use crate::company::EnrichedCompany;
use crate::stats::MetricStats;
use crate::scoring::normalize_score;

/// One metric's position against the sector, with the signed distance to
/// the sector leader. `gap_to_leader <= 0` always means at or ahead of the
/// leader, whichever way the metric's polarity points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapEntry {
    pub company_value: Decimal,
    pub avg_value: Decimal,
    pub leader_value: Decimal,
    pub leader_name: String,
    pub gap_to_leader: Decimal,
}

/// Best raw value among peers honoring polarity, with the first peer
/// achieving it on ties (input order is preserved deliberately).
fn sector_leader(
    peers: &[EnrichedCompany],
    key: MetricKey,
    lower_is_better: bool,
) -> Option<(Decimal, &str)> {
    let mut best: Option<(Decimal, &str)> = None;
    for peer in peers {
        let Some(value) = peer.metric(key) else { continue };
        let beats = match best {
            None => true,
            Some((current, _)) => {
                if lower_is_better {
                    value < current
                } else {
                    value > current
                }
            }
        };
        if beats {
            best = Some((value, peer.record.company_name.as_str()));
        }
    }
    best
}

/// Per-metric gap analysis. Every catalog key is present in the result;
/// a metric with any missing input maps to `None`.
pub fn analyze_gaps(
    company: &EnrichedCompany,
    peers: &[EnrichedCompany],
    stats: &BTreeMap<MetricKey, MetricStats>,
) -> BTreeMap<MetricKey, Option<GapEntry>> {
    let mut gaps = BTreeMap::new();
    for key in all_keys() {
        let desc = describe(*key);
        let entry = (|| {
            let company_value = company.metric(*key)?;
            let avg_value = stats.get(key)?.avg;
            let (leader_value, leader_name) = sector_leader(peers, *key, desc.lower_is_better)?;
            let gap_to_leader = if desc.lower_is_better {
                company_value - leader_value
            } else {
                leader_value - company_value
            };
            Some(GapEntry {
                company_value,
                avg_value,
                leader_value,
                leader_name: leader_name.to_string(),
                gap_to_leader,
            })
        })();
        gaps.insert(*key, entry);
    }
    gaps
}

/// One radar axis: normalized 0-100 scores for the company, the sector
/// average, and the sector leader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarPoint {
    pub dimension: String,
    pub company: Decimal,
    pub sector_avg: Decimal,
    pub leader: Decimal,
}

fn radar_value(value: Option<Decimal>, ms: Option<&MetricStats>, lower_is_better: bool) -> Decimal {
    // Radar charts cannot render "no data" as a gap, so absence degrades to
    // zero here and only here; everywhere else absent stays absent.
    ms.and_then(|ms| normalize_score(value, ms.min, ms.max, lower_is_better))
        .map(|s| s.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

/// Project company / sector-average / sector-leader scores onto the fixed
/// radar dimensions, in catalog order.
pub fn build_radar(
    company: &EnrichedCompany,
    peers: &[EnrichedCompany],
    stats: &BTreeMap<MetricKey, MetricStats>,
) -> Vec<RadarPoint> {
    RADAR_KEYS
        .into_iter()
        .map(|key| {
            let desc = describe(key);
            let ms = stats.get(&key);
            let leader_value = sector_leader(peers, key, desc.lower_is_better).map(|(v, _)| v);
            RadarPoint {
                dimension: desc.label.to_string(),
                company: radar_value(company.metric(key), ms, desc.lower_is_better),
                sector_avg: radar_value(ms.map(|m| m.avg), ms, desc.lower_is_better),
                leader: radar_value(leader_value, ms, desc.lower_is_better),
            }
        })
        .collect()
}

/// A metric placed in one of the classification buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedMetric {
    pub metric: MetricKey,
    pub label: String,
    pub percentile: u32,
}

/// Strengths, weaknesses, and improvement opportunities, each in catalog
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    pub strengths: Vec<ClassifiedMetric>,
    pub weaknesses: Vec<ClassifiedMetric>,
    pub opportunities: Vec<ClassifiedMetric>,
}

/// Bucket metrics by percentile: >= 75 strength, <= 25 weakness, strictly
/// between 25 and 50 an opportunity. A weakness is not duplicated into the
/// opportunities bucket. Absent percentiles are skipped.
pub fn classify(percentiles: &BTreeMap<MetricKey, Option<u32>>) -> Classification {
    let mut out = Classification::default();
    for key in all_keys() {
        let Some(Some(p)) = percentiles.get(key) else { continue };
        let entry = ClassifiedMetric {
            metric: *key,
            label: describe(*key).label.to_string(),
            percentile: *p,
        };
        if *p >= 75 {
            out.strengths.push(entry);
        } else if *p <= 25 {
            out.weaknesses.push(entry);
        } else if *p < 50 {
            out.opportunities.push(entry);
        }
    }
    out
}
