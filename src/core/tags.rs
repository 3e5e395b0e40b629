// src/core/tags.rs
//! Tag list cell codec.
//!
//! Two textual encodings reach us: the comma form used by the `Tags` column
//! (`size_36_40, size_41_46`) and the JSON array form used by list
//! metafields (`["Female","Male"]`). Output is always the JSON form.

use serde_json::Value;

/// Ordered tag list. Order is kept on output; the codec never dedups.
pub type TagList = Vec<String>;

/// Split a comma-separated cell: trimmed, empties dropped, order kept.
pub fn decode_comma(cell: &str) -> TagList {
    cell.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a JSON-list cell.
///
/// Arrays yield their elements, a scalar becomes a one-element list, and
/// text that isn't JSON at all is kept as a single raw tag.
pub fn decode_json(cell: &str) -> TagList {
    if cell.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(cell) {
        Ok(Value::Array(items)) => items.into_iter().filter_map(value_to_tag).collect(),
        Ok(other) => value_to_tag(other).into_iter().collect(),
        Err(_) => vec![cell.to_string()],
    }
}

fn value_to_tag(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// JSON array text, `[]` for an empty list.
pub fn encode<S: AsRef<str>>(tags: &[S]) -> String {
    Value::Array(
        tags.iter()
            .map(|t| Value::String(t.as_ref().to_string()))
            .collect(),
    )
    .to_string()
}
