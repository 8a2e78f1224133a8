//! Configuration key handling.
//!
//! Keys are hierarchical paths separated by `:` (e.g. `Gemini:ApiKey`) and
//! are compared case-insensitively.

use serde_json::Value;

/// Separator between path segments of a configuration key.
pub const KEY_DELIMITER: &str = ":";

/// Normalize a key for lookup: trimmed and lowercased.
pub fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Convert an environment variable name into a configuration key.
///
/// A double underscore stands in for the `:` delimiter, since `:` is not
/// valid in variable names on every platform (`Gemini__ApiKey` -> `Gemini:ApiKey`).
pub fn from_env_name(name: &str) -> String {
    name.replace("__", KEY_DELIMITER)
}

/// Join a parent path and a child segment.
pub fn combine(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}{KEY_DELIMITER}{child}")
    }
}

/// Flatten a JSON document into `(key, value)` pairs.
///
/// Objects contribute their member names as path segments and arrays their
/// indices. Strings are taken verbatim, numbers and booleans are rendered
/// with their JSON text, and `null` becomes an empty string. Empty objects
/// and arrays contribute nothing.
pub fn flatten_json(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(String::new(), value, &mut out);
    out
}

fn flatten_into(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                flatten_into(combine(&prefix, name), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(combine(&prefix, &index.to_string()), child, out);
            }
        }
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Null => out.push((prefix, String::new())),
        Value::Bool(_) | Value::Number(_) => out.push((prefix, value.to_string())),
    }
}
