use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::render_value;

/// Format output as tables using the tabled crate.
///
/// Benchmark payloads get a pillar-score table first; everything else
/// falls back to a generic field/value or array rendering.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result);
                print_warnings(map);
                if let Some(Value::String(methodology)) = map.get("methodology") {
                    println!("\nMethodology: {}", methodology);
                }
            } else {
                print_result(value);
            }
        }
        Value::Array(arr) => print_rows(arr),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value) {
    let Value::Object(map) = result else {
        println!("{}", result);
        return;
    };

    if let Some(Value::Object(pillars)) = map.get("pillar_scores") {
        println!("Pillar scores:");
        print_pairs(pillars.iter());
        for bucket in ["strengths", "weaknesses", "opportunities"] {
            if let Some(Value::Array(entries)) = map.get(bucket) {
                if !entries.is_empty() {
                    println!("\n{}:", bucket);
                    print_rows(entries);
                }
            }
        }
        return;
    }

    // Array-bearing reports (ranking, heatmap): render the rows.
    for key in ["ranked", "data"] {
        if let Some(Value::Array(rows)) = map.get(key) {
            print_rows(rows);
            return;
        }
    }

    print_pairs(map.iter());
}

fn print_pairs<'a>(pairs: impl Iterator<Item = (&'a String, &'a Value)>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in pairs {
        builder.push_record([key.to_string(), render_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_rows(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", render_value(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(render_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_warnings(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }
}
