use esg_benchmark_core::benchmark::{company_benchmark, heatmap, metric_ranking, sector_stats};
use esg_benchmark_core::catalog::{all_keys, describe, MetricKey};
use esg_benchmark_core::company::{enrich, CompanyRecord};
use esg_benchmark_core::scoring::{normalize_score, percentile_rank};
use esg_benchmark_core::stats::aggregate;
use esg_benchmark_core::EsgBenchError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end benchmark pipeline tests over the public API.
// Fixtures model a small oil & gas sector with partially reported data.
// ===========================================================================

fn record(id: &str, name: &str) -> CompanyRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "company_name": name,
        "sector": "Oil & Gas",
    }))
    .unwrap()
}

fn sector() -> Vec<CompanyRecord> {
    let mut alpha = record("a", "Alpha Petro");
    alpha.scope_1 = Some(dec!(50));
    alpha.emissions_intensity = Some(dec!(0.8));
    alpha.renewable_energy = Some(dec!(400));
    alpha.energy_consumption = Some(dec!(1000));
    alpha.female_employees = Some(dec!(320));
    alpha.employees = Some(dec!(1000));
    alpha.ltifr = Some(dec!(0.2));
    alpha.independent_directors_percent = Some(dec!(60));
    alpha.data_breaches = Some(dec!(0));

    let mut beta = record("b", "Beta Oil");
    beta.scope_1 = Some(dec!(60));
    beta.emissions_intensity = Some(dec!(1.4));
    beta.renewable_energy = Some(dec!(100));
    beta.energy_consumption = Some(dec!(1000));
    beta.female_employees = Some(dec!(150));
    beta.employees = Some(dec!(1000));
    beta.ltifr = Some(dec!(0.9));
    beta.independent_directors_percent = Some(dec!(45));
    beta.data_breaches = Some(dec!(3));

    let mut gamma = record("c", "Gamma Gas");
    gamma.scope_1 = Some(dec!(100));
    gamma.emissions_intensity = Some(dec!(1.1));
    gamma.ltifr = Some(dec!(0.5));
    gamma.independent_directors_percent = Some(dec!(50));

    let mut delta = record("d", "Delta Energy");
    delta.scope_1 = Some(dec!(140));

    let mut epsilon = record("e", "Epsilon Fuels");
    epsilon.scope_1 = Some(dec!(150));

    vec![alpha, beta, gamma, delta, epsilon]
}

// ---------------------------------------------------------------------------
// Quartile ordering property
// ---------------------------------------------------------------------------

#[test]
fn test_quartile_ordering_holds_for_every_metric_with_data() {
    let agg = aggregate(&sector());
    assert!(!agg.stats.is_empty());
    for (key, ms) in &agg.stats {
        assert!(ms.min <= ms.p25, "min > p25 for {}", key);
        assert!(ms.p25 <= ms.median, "p25 > median for {}", key);
        assert!(ms.median <= ms.p75, "median > p75 for {}", key);
        assert!(ms.p75 <= ms.max, "p75 > max for {}", key);
        assert!(ms.count >= 1);
    }
}

// ---------------------------------------------------------------------------
// Normalization extremes
// ---------------------------------------------------------------------------

#[test]
fn test_normalize_extremes_for_both_polarities() {
    for (min, max) in [(dec!(0), dec!(10)), (dec!(-5), dec!(7)), (dec!(100), dec!(900))] {
        assert_eq!(normalize_score(Some(min), min, max, true), Some(dec!(100)));
        assert_eq!(normalize_score(Some(max), min, max, true), Some(dec!(0)));
        assert_eq!(normalize_score(Some(min), min, max, false), Some(dec!(0)));
        assert_eq!(normalize_score(Some(max), min, max, false), Some(dec!(100)));
    }
}

// ---------------------------------------------------------------------------
// Percentile extremes and absence
// ---------------------------------------------------------------------------

#[test]
fn test_rank_extremes_against_peer_population() {
    let peers: Vec<Option<Decimal>> = vec![Some(dec!(2)), Some(dec!(5)), Some(dec!(9))];
    assert_eq!(percentile_rank(Some(dec!(1)), &peers, true), Some(100));
    assert_eq!(percentile_rank(Some(dec!(10)), &peers, true), Some(0));
    assert_eq!(percentile_rank(Some(dec!(10)), &peers, false), Some(100));
    assert_eq!(percentile_rank(Some(dec!(1)), &peers, false), Some(0));
}

#[test]
fn test_rank_and_normalize_absent_inputs() {
    assert_eq!(percentile_rank(None, &[Some(dec!(1))], true), None);
    assert_eq!(percentile_rank(Some(dec!(1)), &[], true), None);
    assert_eq!(normalize_score(None, dec!(0), dec!(1), true), None);
    assert_eq!(normalize_score(Some(dec!(1)), dec!(3), dec!(3), true), None);
}

// ---------------------------------------------------------------------------
// Full payload assembly
// ---------------------------------------------------------------------------

#[test]
fn test_full_payload_round_trips_through_json_with_explicit_nulls() {
    let peers = sector();
    let out = company_benchmark(&peers[2], &peers).unwrap();
    let value = serde_json::to_value(&out).unwrap();

    let payload = &value["result"];
    // Absent percentiles serialize as explicit null, never 0.
    assert!(payload["percentiles"]
        .as_object()
        .unwrap()
        .contains_key("board_women_percent"));
    assert!(payload["percentiles"]["board_women_percent"].is_null());
    // Metrics with no data anywhere are omitted from sector stats.
    assert!(payload["sector_stats"]
        .as_object()
        .unwrap()
        .get("board_women_percent")
        .is_none());
    // Radar points always carry numbers.
    for point in payload["radar"].as_array().unwrap() {
        assert!(!point["company"].is_null());
        assert!(!point["leader"].is_null());
    }
}

#[test]
fn test_payload_strengths_and_weaknesses_are_disjoint() {
    let peers = sector();
    for company in &peers {
        let out = company_benchmark(company, &peers).unwrap();
        let payload = &out.result;
        for s in &payload.strengths {
            assert!(
                !payload.weaknesses.iter().any(|w| w.metric == s.metric),
                "{} appears in both strengths and weaknesses for {}",
                s.metric,
                company.company_name
            );
            assert!(
                !payload.opportunities.iter().any(|o| o.metric == s.metric),
                "{} appears in both strengths and opportunities for {}",
                s.metric,
                company.company_name
            );
        }
        for w in &payload.weaknesses {
            assert!(w.percentile <= 25);
            assert!(!payload.opportunities.iter().any(|o| o.metric == w.metric));
        }
        for o in &payload.opportunities {
            assert!(o.percentile > 25 && o.percentile < 50);
        }
    }
}

#[test]
fn test_leader_company_wins_its_gaps() {
    let peers = sector();
    let out = company_benchmark(&peers[0], &peers).unwrap();
    let gap = out.result.gap_analysis[&MetricKey::Scope1].as_ref().unwrap();

    assert_eq!(gap.leader_name, "Alpha Petro");
    assert_eq!(gap.gap_to_leader, dec!(0));
    assert_eq!(gap.avg_value, dec!(100));
}

#[test]
fn test_benchmark_of_isolated_company_still_assembles() {
    let lone = record("z", "Zeta Solo");
    let out = company_benchmark(&lone, &[]).unwrap();
    let payload = &out.result;

    assert_eq!(payload.peer_count, 0);
    assert!(payload.strengths.is_empty());
    assert!(payload.weaknesses.is_empty());
    assert!(payload.opportunities.is_empty());
    assert_eq!(payload.pillar_scores.environmental, None);
    assert_eq!(payload.pillar_scores.social, None);
    assert_eq!(payload.pillar_scores.governance, None);
    assert_eq!(payload.pillar_scores.overall, None);
    // Radar still renders, degraded to zeros.
    assert!(payload.radar.iter().all(|p| p.company == Decimal::ZERO));
}

// ---------------------------------------------------------------------------
// Enrichment purity
// ---------------------------------------------------------------------------

#[test]
fn test_enrich_purity_across_repeated_calls() {
    let peers = sector();
    let first = enrich(&peers[0]);
    let second = enrich(&peers[0]);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
    assert_eq!(first.renewable_energy_pct, Some(dec!(40)));
    assert_eq!(first.gender_diversity_pct, Some(dec!(32)));
}

// ---------------------------------------------------------------------------
// Secondary operations
// ---------------------------------------------------------------------------

#[test]
fn test_sector_stats_and_heatmap_agree_on_coverage() {
    let peers = sector();
    let stats = sector_stats(&peers, Some("Oil & Gas")).unwrap();
    let map = heatmap(&peers).unwrap();

    for key in all_keys() {
        let has_stats = stats.stats.contains_key(key);
        let any_score = map.data.iter().any(|row| row.scores[key].is_some());
        if any_score {
            assert!(has_stats, "heatmap scored {} without sector stats", key);
        }
    }
}

#[test]
fn test_ranking_percentiles_are_monotone_with_position() {
    let peers = sector();
    let report = metric_ranking(&peers, "scope_1").unwrap();
    assert_eq!(report.label, "Scope 1 Emissions");

    let percentiles: Vec<u32> = report.ranked.iter().filter_map(|r| r.percentile).collect();
    assert_eq!(percentiles.len(), report.ranked.len());
    for pair in percentiles.windows(2) {
        assert!(pair[0] >= pair[1], "best-first ordering broke: {:?}", pair);
    }
}

#[test]
fn test_unknown_metric_key_escalates() {
    let err = metric_ranking(&sector(), "profit_margin").unwrap_err();
    assert!(matches!(err, EsgBenchError::UnknownMetric { .. }));
}

// ---------------------------------------------------------------------------
// Catalog-driven serialization stability
// ---------------------------------------------------------------------------

#[test]
fn test_percentile_map_iterates_in_catalog_order() {
    let peers = sector();
    let out = company_benchmark(&peers[0], &peers).unwrap();
    let keys: Vec<MetricKey> = out.result.percentiles.keys().copied().collect();
    assert_eq!(keys, all_keys().to_vec());
    // Catalog order starts with the environmental block.
    assert_eq!(describe(keys[0]).label, "Scope 1 Emissions");
}
