use serde_json::Value;

use esg_benchmark_core::catalog::{all_keys, describe};

/// List every catalog metric with its label, unit, pillar, and polarity.
pub fn run_catalog() -> Result<Value, Box<dyn std::error::Error>> {
    let entries: Vec<Value> = all_keys()
        .iter()
        .map(|key| serde_json::to_value(describe(*key)))
        .collect::<Result<_, _>>()?;
    Ok(Value::Array(entries))
}
