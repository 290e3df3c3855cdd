//! Company records and the derived-metrics computer.
//!
//! Raw records come from an external ingestion process; every metric field
//! is optional because absence ("not reported") must stay distinguishable
//! from zero throughout the pipeline. `enrich` produces the read-side view
//! with derived fields recomputed on every call.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::MetricKey;

/// A raw per-company ESG record as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: String,
    pub company_name: String,
    #[serde(default)]
    pub bse_code: Option<String>,
    pub sector: String,
    #[serde(default)]
    pub serial_number: Option<u32>,

    // Environmental
    #[serde(default)]
    pub scope_1: Option<Decimal>,
    #[serde(default)]
    pub scope_2: Option<Decimal>,
    #[serde(default)]
    pub emissions_intensity: Option<Decimal>,
    #[serde(default)]
    pub net_zero_target_year: Option<Decimal>,
    #[serde(default)]
    pub energy_consumption: Option<Decimal>,
    #[serde(default)]
    pub renewable_energy: Option<Decimal>,
    #[serde(default)]
    pub water_consumption: Option<Decimal>,
    #[serde(default)]
    pub total_waste: Option<Decimal>,

    // Social
    #[serde(default)]
    pub female_employees: Option<Decimal>,
    #[serde(default)]
    pub employees: Option<Decimal>,
    #[serde(default)]
    pub board_women_percent: Option<Decimal>,
    #[serde(default)]
    pub median_remuneration_female: Option<Decimal>,
    #[serde(default)]
    pub median_remuneration_male: Option<Decimal>,
    #[serde(default)]
    pub ltifr: Option<Decimal>,
    #[serde(default)]
    pub employee_turnover_rate: Option<Decimal>,

    // Governance
    #[serde(default)]
    pub independent_directors_percent: Option<Decimal>,
    #[serde(default)]
    pub data_breaches: Option<Decimal>,
}

/// A company record plus its derived metrics. Created fresh on every read;
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedCompany {
    #[serde(flatten)]
    pub record: CompanyRecord,

    // Derived — recomputed by `enrich`, absent when any input is absent.
    pub renewable_energy_pct: Option<Decimal>,
    pub gender_diversity_pct: Option<Decimal>,
    pub pay_equity_ratio: Option<Decimal>,
}

/// Percentage of `part` over `total`. Absent when either side is missing or
/// the total is zero.
fn pct_of(part: Option<Decimal>, total: Option<Decimal>) -> Option<Decimal> {
    match (part, total) {
        (Some(p), Some(t)) if !t.is_zero() => Some(p / t * dec!(100)),
        _ => None,
    }
}

/// Ratio of two figures. Absent when either side is missing or the
/// denominator is zero.
fn ratio_of(numerator: Option<Decimal>, denominator: Option<Decimal>) -> Option<Decimal> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if !d.is_zero() => Some(n / d),
        _ => None,
    }
}

/// Compute the enriched view of a raw record. Pure: does not mutate its
/// input and yields identical output for identical input.
pub fn enrich(record: &CompanyRecord) -> EnrichedCompany {
    EnrichedCompany {
        renewable_energy_pct: pct_of(record.renewable_energy, record.energy_consumption),
        gender_diversity_pct: pct_of(record.female_employees, record.employees),
        pay_equity_ratio: ratio_of(
            record.median_remuneration_female,
            record.median_remuneration_male,
        ),
        record: record.clone(),
    }
}

impl EnrichedCompany {
    /// Uniform accessor for any catalog metric, raw or derived.
    pub fn metric(&self, key: MetricKey) -> Option<Decimal> {
        match key {
            MetricKey::Scope1 => self.record.scope_1,
            MetricKey::Scope2 => self.record.scope_2,
            MetricKey::EmissionsIntensity => self.record.emissions_intensity,
            MetricKey::RenewableEnergyPct => self.renewable_energy_pct,
            MetricKey::WaterConsumption => self.record.water_consumption,
            MetricKey::TotalWaste => self.record.total_waste,
            MetricKey::NetZeroTargetYear => self.record.net_zero_target_year,
            MetricKey::GenderDiversityPct => self.gender_diversity_pct,
            MetricKey::BoardWomenPercent => self.record.board_women_percent,
            MetricKey::PayEquityRatio => self.pay_equity_ratio,
            MetricKey::Ltifr => self.record.ltifr,
            MetricKey::EmployeeTurnoverRate => self.record.employee_turnover_rate,
            MetricKey::IndependentDirectorsPercent => self.record.independent_directors_percent,
            MetricKey::DataBreaches => self.record.data_breaches,
        }
    }
}
