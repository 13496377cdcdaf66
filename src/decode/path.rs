//! Extraction-path resolution
//!
//! A path is a field name. It is looked up literally first, so keys that
//! contain dots keep working; only when that fails is a dotted path walked
//! one object level per segment. The empty path addresses the whole value.

use serde_json::Value;

/// Resolve `path` against `value`
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    let Value::Object(map) = value else {
        return None;
    };

    if let Some(found) = map.get(path) {
        return Some(found);
    }
    if !path.contains('.') {
        return None;
    }

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Move the value at `path` out of `value`, same resolution rules as [`lookup`]
fn take(value: Value, path: &str) -> Option<Value> {
    let Value::Object(mut map) = value else {
        return None;
    };

    if let Some(found) = map.remove(path) {
        return Some(found);
    }
    if !path.contains('.') {
        return None;
    }

    let mut current = Value::Object(map);
    for part in path.split('.') {
        match current {
            Value::Object(mut map) => {
                current = map.remove(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Extract the records stored at `path`, consuming the decoded response
///
/// - empty path: the whole value is a single record
/// - array: one record per element
/// - anything else, or unresolved: no records
pub fn extract_items(value: Value, path: &str) -> Vec<Value> {
    if path.is_empty() {
        return vec![value];
    }

    match take(value, path) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

/// Extract a non-negative integer stored at `path`
///
/// Accepts JSON numbers (integral, or floats with no fractional part) and
/// numeric strings such as `"3"`.
pub fn extract_u64(value: &Value, path: &str) -> Option<u64> {
    match lookup(value, path)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
