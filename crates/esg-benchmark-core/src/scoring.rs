//! Percentile ranking, score normalization, and pillar scores.
//!
//! Every function here resolves missing data locally to `None`; absence is
//! never collapsed to zero and never escalated as an error.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::{describe, pillar_keys, MetricKey, Pillar};
use crate::company::EnrichedCompany;
use crate::stats::MetricStats;

const SCORE_MIN: Decimal = dec!(0);
const SCORE_MAX: Decimal = dec!(100);

fn clamp_score(score: Decimal) -> Decimal {
    if score < SCORE_MIN {
        SCORE_MIN
    } else if score > SCORE_MAX {
        SCORE_MAX
    } else {
        score
    }
}

/// Round to the nearest integer, half away from zero (`Math.round` style,
/// not the banker's rounding rust_decimal defaults to).
fn round_to_u32(score: Decimal) -> Option<u32> {
    score
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

/// Percentile rank of `value` among `peer_values`, as an integer 0-100.
///
/// Competition ranking with ties averaged: the fraction of present peer
/// values that are worse, plus half the fraction exactly equal. "Worse"
/// honors polarity: strictly greater under lower-is-better, strictly
/// smaller otherwise. Absent when `value` is absent or no peer reports a
/// value (an empty population is "no data", never a fabricated 50).
pub fn percentile_rank(
    value: Option<Decimal>,
    peer_values: &[Option<Decimal>],
    lower_is_better: bool,
) -> Option<u32> {
    let value = value?;
    let present: Vec<Decimal> = peer_values.iter().copied().flatten().collect();
    if present.is_empty() {
        return None;
    }

    let worse = present
        .iter()
        .filter(|&&p| if lower_is_better { p > value } else { p < value })
        .count();
    let equal = present.iter().filter(|&&p| p == value).count();

    let fraction = (Decimal::from(worse) + Decimal::from(equal) / dec!(2))
        / Decimal::from(present.len());
    round_to_u32(fraction * dec!(100))
}

/// Rescale `value` to 0-100 against the peer min/max, honoring polarity.
///
/// Absent when `value` is absent or the range is degenerate (min == max):
/// normalization is undefined there and callers show "no data" instead of
/// a misleading constant. Clamped to [0,100] because the company may sit
/// outside the peer-derived range.
pub fn normalize_score(
    value: Option<Decimal>,
    min: Decimal,
    max: Decimal,
    lower_is_better: bool,
) -> Option<Decimal> {
    let value = value?;
    if min == max {
        return None;
    }
    let position = (value - min) / (max - min) * dec!(100);
    let score = if lower_is_better {
        dec!(100) - position
    } else {
        position
    };
    Some(clamp_score(score))
}

/// Pillar-level aggregate scores, each absent or an integer 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarScores {
    pub environmental: Option<u32>,
    pub social: Option<u32>,
    pub governance: Option<u32>,
    pub overall: Option<u32>,
}

fn pillar_score(
    company: &EnrichedCompany,
    stats: &BTreeMap<MetricKey, MetricStats>,
    pillar: Pillar,
) -> Option<u32> {
    let mut sum = Decimal::ZERO;
    let mut count = 0u32;
    for key in pillar_keys(pillar) {
        let Some(ms) = stats.get(&key) else { continue };
        let desc = describe(key);
        if let Some(score) = normalize_score(company.metric(key), ms.min, ms.max, desc.lower_is_better)
        {
            sum += score;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    round_to_u32(sum / Decimal::from(count))
}

/// Score each pillar by averaging the normalized scores of its metrics,
/// excluding (not zeroing) metrics with no value or no sector stats. The
/// overall score is the unweighted mean of whichever pillars are present.
pub fn score_pillars(
    company: &EnrichedCompany,
    stats: &BTreeMap<MetricKey, MetricStats>,
) -> PillarScores {
    let environmental = pillar_score(company, stats, Pillar::Environmental);
    let social = pillar_score(company, stats, Pillar::Social);
    let governance = pillar_score(company, stats, Pillar::Governance);

    let present: Vec<u32> = [environmental, social, governance]
        .into_iter()
        .flatten()
        .collect();
    let overall = if present.is_empty() {
        None
    } else {
        let sum: Decimal = present.iter().map(|s| Decimal::from(*s)).sum();
        round_to_u32(sum / Decimal::from(present.len()))
    };

    PillarScores {
        environmental,
        social,
        governance,
        overall,
    }
}
