//! Sector distribution statistics.
//!
//! For each catalog metric, aggregates the present values across an
//! enriched peer set into min / max / mean / median / quartiles. Metrics
//! with no reported value anywhere are omitted entirely; a missing entry
//! means "no data", never zero.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{all_keys, MetricKey};
use crate::company::{enrich, CompanyRecord, EnrichedCompany};

/// Distribution statistics for one metric over a peer set.
///
/// Invariant: min <= p25 <= median <= p75 <= max.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricStats {
    pub min: Decimal,
    pub max: Decimal,
    pub avg: Decimal,
    pub median: Decimal,
    pub p25: Decimal,
    pub p75: Decimal,
    pub count: usize,
}

/// Enriched peers plus their per-metric statistics, keyed in catalog order.
#[derive(Debug, Clone)]
pub struct SectorAggregate {
    pub enriched: Vec<EnrichedCompany>,
    pub stats: BTreeMap<MetricKey, MetricStats>,
}

/// Linear-interpolation quantile over a sorted, non-empty value set
/// (inclusive method: interpolate at fractional index q * (n - 1)).
fn quantile(sorted: &[Decimal], q: Decimal) -> Decimal {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let index = q * Decimal::from(n - 1);
    let lo = index.floor().to_usize().unwrap_or(0);
    let fraction = index - index.floor();
    if fraction.is_zero() || lo + 1 >= n {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[lo + 1] - sorted[lo]) * fraction
    }
}

fn stats_for_values(mut values: Vec<Decimal>) -> MetricStats {
    values.sort();
    let count = values.len();
    let sum: Decimal = values.iter().copied().sum();
    MetricStats {
        min: values[0],
        max: values[count - 1],
        avg: sum / Decimal::from(count),
        median: quantile(&values, Decimal::new(5, 1)),
        p25: quantile(&values, Decimal::new(25, 2)),
        p75: quantile(&values, Decimal::new(75, 2)),
        count,
    }
}

/// Enrich every peer and compute per-metric sector statistics.
pub fn aggregate(peers: &[CompanyRecord]) -> SectorAggregate {
    let enriched: Vec<EnrichedCompany> = peers.iter().map(enrich).collect();

    let mut stats = BTreeMap::new();
    for key in all_keys() {
        let values: Vec<Decimal> = enriched.iter().filter_map(|c| c.metric(*key)).collect();
        if values.is_empty() {
            continue;
        }
        stats.insert(*key, stats_for_values(values));
    }

    SectorAggregate { enriched, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::fixtures::blank_record;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn peers_with_scope1(values: &[Decimal]) -> Vec<CompanyRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mut r = blank_record(&format!("c{}", i), &format!("Peer {}", i), "Oil & Gas");
                r.scope_1 = Some(*v);
                r
            })
            .collect()
    }

    #[test]
    fn test_quantile_interpolates_between_order_statistics() {
        let sorted = vec![dec!(10), dec!(20), dec!(30), dec!(40)];
        // q = 0.25 over n = 4: index 0.75 -> 10 + 0.75 * 10
        assert_eq!(quantile(&sorted, dec!(0.25)), dec!(17.5));
        assert_eq!(quantile(&sorted, dec!(0.5)), dec!(25));
        assert_eq!(quantile(&sorted, dec!(0.75)), dec!(32.5));
        assert_eq!(quantile(&sorted, dec!(0)), dec!(10));
        assert_eq!(quantile(&sorted, dec!(1)), dec!(40));
    }

    #[test]
    fn test_aggregate_basic_stats() {
        let peers = peers_with_scope1(&[dec!(50), dec!(60), dec!(100), dec!(140), dec!(150)]);
        let agg = aggregate(&peers);
        let ms = agg.stats.get(&MetricKey::Scope1).unwrap();

        assert_eq!(ms.min, dec!(50));
        assert_eq!(ms.max, dec!(150));
        assert_eq!(ms.avg, dec!(100));
        assert_eq!(ms.median, dec!(100));
        assert_eq!(ms.p25, dec!(60));
        assert_eq!(ms.p75, dec!(140));
        assert_eq!(ms.count, 5);
    }

    #[test]
    fn test_aggregate_quartile_ordering_invariant() {
        let peers = peers_with_scope1(&[dec!(7), dec!(3), dec!(11), dec!(2), dec!(9), dec!(5)]);
        let agg = aggregate(&peers);
        let ms = agg.stats.get(&MetricKey::Scope1).unwrap();

        assert!(ms.min <= ms.p25);
        assert!(ms.p25 <= ms.median);
        assert!(ms.median <= ms.p75);
        assert!(ms.p75 <= ms.max);
    }

    #[test]
    fn test_aggregate_single_peer_collapses_stats() {
        let peers = peers_with_scope1(&[dec!(42)]);
        let agg = aggregate(&peers);
        let ms = agg.stats.get(&MetricKey::Scope1).unwrap();

        assert_eq!(ms.min, dec!(42));
        assert_eq!(ms.max, dec!(42));
        assert_eq!(ms.avg, dec!(42));
        assert_eq!(ms.median, dec!(42));
        assert_eq!(ms.p25, dec!(42));
        assert_eq!(ms.p75, dec!(42));
        assert_eq!(ms.count, 1);
    }

    #[test]
    fn test_aggregate_omits_metrics_with_no_data() {
        let peers = peers_with_scope1(&[dec!(1), dec!(2)]);
        let agg = aggregate(&peers);

        assert!(agg.stats.contains_key(&MetricKey::Scope1));
        assert!(!agg.stats.contains_key(&MetricKey::Ltifr));
        assert!(!agg.stats.contains_key(&MetricKey::DataBreaches));
    }

    #[test]
    fn test_aggregate_counts_only_present_values() {
        let mut peers = peers_with_scope1(&[dec!(10), dec!(20), dec!(30)]);
        peers[1].scope_1 = None;
        let agg = aggregate(&peers);
        let ms = agg.stats.get(&MetricKey::Scope1).unwrap();

        assert_eq!(ms.count, 2);
        assert_eq!(ms.min, dec!(10));
        assert_eq!(ms.max, dec!(30));
        assert_eq!(ms.avg, dec!(20));
    }

    #[test]
    fn test_aggregate_includes_derived_metrics() {
        let mut peers = peers_with_scope1(&[dec!(1), dec!(2)]);
        peers[0].renewable_energy = Some(dec!(30));
        peers[0].energy_consumption = Some(dec!(100));
        let agg = aggregate(&peers);
        let ms = agg.stats.get(&MetricKey::RenewableEnergyPct).unwrap();

        assert_eq!(ms.count, 1);
        assert_eq!(ms.avg, dec!(30));
    }

    #[test]
    fn test_aggregate_empty_peer_set() {
        let agg = aggregate(&[]);
        assert!(agg.enriched.is_empty());
        assert!(agg.stats.is_empty());
    }

    #[test]
    fn test_duplicate_values_occupy_adjacent_ranks() {
        let peers = peers_with_scope1(&[dec!(10), dec!(10), dec!(10), dec!(40)]);
        let agg = aggregate(&peers);
        let ms = agg.stats.get(&MetricKey::Scope1).unwrap();

        assert_eq!(ms.min, dec!(10));
        assert_eq!(ms.p25, dec!(10));
        assert_eq!(ms.median, dec!(10));
        assert_eq!(ms.p75, dec!(17.5));
        assert_eq!(ms.max, dec!(40));
    }
}
