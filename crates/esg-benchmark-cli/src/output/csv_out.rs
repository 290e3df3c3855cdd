use serde_json::Value;
use std::io;

use super::render_value;

/// Write output as CSV to stdout. Row-oriented reports (ranking, heatmap)
/// become one record per entry; everything else is field,value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);
            let rows = result
                .as_object()
                .and_then(|m| m.get("ranked").or_else(|| m.get("data")))
                .and_then(Value::as_array);
            match rows {
                Some(rows) => write_rows(&mut wtr, rows),
                None => write_pairs(&mut wtr, result),
            }
        }
        Value::Array(arr) => write_rows(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_pairs(wtr: &mut csv::Writer<io::StdoutLock<'_>>, value: &Value) {
    let _ = wtr.write_record(["field", "value"]);
    if let Value::Object(map) = value {
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), csv_value(val).as_str()]);
        }
    }
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&csv_value(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => render_value(other),
    }
}
