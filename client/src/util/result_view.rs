//! Flatten opaque inference results into displayable rows.
//!
//! Model outputs have no fixed schema on this side of the wire; they are
//! shown as `key -> value` rows with dotted/indexed keys for nested data.

#[cfg(test)]
#[path = "result_view_test.rs"]
mod result_view_test;

use serde_json::Value;

/// Label used when the result itself is a scalar.
pub const ROOT_KEY: &str = "resultado";

pub fn flatten_result(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    flatten_into(value, String::new(), &mut rows);
    rows
}

fn flatten_into(value: &Value, prefix: String, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
                flatten_into(child, path, rows);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                let path = if prefix.is_empty() { format!("[{i}]") } else { format!("{prefix}[{i}]") };
                flatten_into(child, path, rows);
            }
        }
        scalar => {
            let key = if prefix.is_empty() { ROOT_KEY.to_owned() } else { prefix };
            rows.push((key, scalar_text(scalar)));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "—".to_owned(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => super::chart_geometry::fmt_num(f),
            _ => n.to_string(),
        },
        Value::Object(_) => "{}".to_owned(),
        Value::Array(_) => "[]".to_owned(),
        Value::Bool(b) => if *b { "sí" } else { "no" }.to_owned(),
    }
}
