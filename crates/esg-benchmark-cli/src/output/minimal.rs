use serde_json::Value;

use super::render_value;

/// Print just the headline number from the output.
///
/// For a benchmark payload that is the overall pillar score; other reports
/// fall back to their first field.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(overall) = result.pointer("/pillar_scores/overall") {
        println!("{}", render_value(overall));
        return;
    }

    if let Value::Object(map) = result {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, render_value(val));
            return;
        }
    }

    println!("{}", render_value(result));
}
