//! Static metric catalog.
//!
//! Every metric the benchmark engine knows about is declared here, once,
//! with its display label, unit, pillar, and polarity. The catalog is
//! immutable and process-wide; declaration order is the canonical iteration
//! order and drives column/axis ordering in every downstream consumer.

use serde::{Deserialize, Serialize};

use crate::error::EsgBenchError;
use crate::EsgBenchResult;

/// One of the three top-level ESG categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

/// A tracked metric. The discriminant doubles as the catalog index, and the
/// `Ord` impl gives `BTreeMap<MetricKey, _>` catalog iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    #[serde(rename = "scope_1")]
    Scope1,
    #[serde(rename = "scope_2")]
    Scope2,
    EmissionsIntensity,
    RenewableEnergyPct,
    WaterConsumption,
    TotalWaste,
    NetZeroTargetYear,
    GenderDiversityPct,
    BoardWomenPercent,
    PayEquityRatio,
    Ltifr,
    EmployeeTurnoverRate,
    IndependentDirectorsPercent,
    DataBreaches,
}

/// Catalog entry for a single metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricDescriptor {
    pub key: MetricKey,
    pub label: &'static str,
    pub unit: &'static str,
    pub lower_is_better: bool,
    pub pillar: Pillar,
}

/// All catalog metrics in declaration order.
pub const ALL_KEYS: [MetricKey; 14] = [
    MetricKey::Scope1,
    MetricKey::Scope2,
    MetricKey::EmissionsIntensity,
    MetricKey::RenewableEnergyPct,
    MetricKey::WaterConsumption,
    MetricKey::TotalWaste,
    MetricKey::NetZeroTargetYear,
    MetricKey::GenderDiversityPct,
    MetricKey::BoardWomenPercent,
    MetricKey::PayEquityRatio,
    MetricKey::Ltifr,
    MetricKey::EmployeeTurnoverRate,
    MetricKey::IndependentDirectorsPercent,
    MetricKey::DataBreaches,
];

/// Curated subset for radar charts, balanced across pillars.
pub const RADAR_KEYS: [MetricKey; 6] = [
    MetricKey::EmissionsIntensity,
    MetricKey::RenewableEnergyPct,
    MetricKey::GenderDiversityPct,
    MetricKey::Ltifr,
    MetricKey::BoardWomenPercent,
    MetricKey::IndependentDirectorsPercent,
];

// Indexed by MetricKey discriminant; order must match ALL_KEYS.
static CATALOG: [MetricDescriptor; 14] = [
    MetricDescriptor {
        key: MetricKey::Scope1,
        label: "Scope 1 Emissions",
        unit: "tCO2e",
        lower_is_better: true,
        pillar: Pillar::Environmental,
    },
    MetricDescriptor {
        key: MetricKey::Scope2,
        label: "Scope 2 Emissions",
        unit: "tCO2e",
        lower_is_better: true,
        pillar: Pillar::Environmental,
    },
    MetricDescriptor {
        key: MetricKey::EmissionsIntensity,
        label: "Emissions Intensity",
        unit: "tCO2e/unit",
        lower_is_better: true,
        pillar: Pillar::Environmental,
    },
    MetricDescriptor {
        key: MetricKey::RenewableEnergyPct,
        label: "Renewable Energy %",
        unit: "%",
        lower_is_better: false,
        pillar: Pillar::Environmental,
    },
    MetricDescriptor {
        key: MetricKey::WaterConsumption,
        label: "Water Consumption",
        unit: "KL",
        lower_is_better: true,
        pillar: Pillar::Environmental,
    },
    MetricDescriptor {
        key: MetricKey::TotalWaste,
        label: "Total Waste",
        unit: "MT",
        lower_is_better: true,
        pillar: Pillar::Environmental,
    },
    MetricDescriptor {
        key: MetricKey::NetZeroTargetYear,
        label: "Net Zero Target Year",
        unit: "year",
        lower_is_better: true,
        pillar: Pillar::Environmental,
    },
    MetricDescriptor {
        key: MetricKey::GenderDiversityPct,
        label: "Gender Diversity",
        unit: "%",
        lower_is_better: false,
        pillar: Pillar::Social,
    },
    MetricDescriptor {
        key: MetricKey::BoardWomenPercent,
        label: "Board Women %",
        unit: "%",
        lower_is_better: false,
        pillar: Pillar::Social,
    },
    MetricDescriptor {
        key: MetricKey::PayEquityRatio,
        label: "Pay Equity Ratio",
        unit: "ratio",
        lower_is_better: false,
        pillar: Pillar::Social,
    },
    MetricDescriptor {
        key: MetricKey::Ltifr,
        label: "LTIFR",
        unit: "rate",
        lower_is_better: true,
        pillar: Pillar::Social,
    },
    MetricDescriptor {
        key: MetricKey::EmployeeTurnoverRate,
        label: "Employee Turnover",
        unit: "%",
        lower_is_better: true,
        pillar: Pillar::Social,
    },
    MetricDescriptor {
        key: MetricKey::IndependentDirectorsPercent,
        label: "Independent Directors",
        unit: "%",
        lower_is_better: false,
        pillar: Pillar::Governance,
    },
    MetricDescriptor {
        key: MetricKey::DataBreaches,
        label: "Data Breaches",
        unit: "count",
        lower_is_better: true,
        pillar: Pillar::Governance,
    },
];

/// Look up the descriptor for a metric.
pub fn describe(key: MetricKey) -> &'static MetricDescriptor {
    &CATALOG[key as usize]
}

/// All metric keys, in catalog order.
pub fn all_keys() -> &'static [MetricKey] {
    &ALL_KEYS
}

/// The catalog metrics assigned to a pillar, in catalog order.
pub fn pillar_keys(pillar: Pillar) -> impl Iterator<Item = MetricKey> {
    ALL_KEYS
        .into_iter()
        .filter(move |k| describe(*k).pillar == pillar)
}

impl MetricKey {
    /// The wire/storage key for this metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Scope1 => "scope_1",
            MetricKey::Scope2 => "scope_2",
            MetricKey::EmissionsIntensity => "emissions_intensity",
            MetricKey::RenewableEnergyPct => "renewable_energy_pct",
            MetricKey::WaterConsumption => "water_consumption",
            MetricKey::TotalWaste => "total_waste",
            MetricKey::NetZeroTargetYear => "net_zero_target_year",
            MetricKey::GenderDiversityPct => "gender_diversity_pct",
            MetricKey::BoardWomenPercent => "board_women_percent",
            MetricKey::PayEquityRatio => "pay_equity_ratio",
            MetricKey::Ltifr => "ltifr",
            MetricKey::EmployeeTurnoverRate => "employee_turnover_rate",
            MetricKey::IndependentDirectorsPercent => "independent_directors_percent",
            MetricKey::DataBreaches => "data_breaches",
        }
    }

    /// Parse a string key supplied by a caller. Unknown keys are a
    /// client-input error, never a silent null.
    pub fn parse(key: &str) -> EsgBenchResult<MetricKey> {
        ALL_KEYS
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| EsgBenchError::UnknownMetric {
                key: key.to_string(),
            })
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
