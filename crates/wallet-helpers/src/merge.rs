//! Shallow merges of JSON objects.

use serde_json::{Map, Value};

/// Copy every property of `source` into `target`, overwriting keys that
/// `target` already has (last writer wins).
pub fn merge<'a>(target: &'a mut Map<String, Value>, source: &Map<String, Value>) -> &'a mut Map<String, Value> {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
    target
}

/// Copy only the properties of `source` that `target` does not define.
pub fn merge_missing<'a>(
    target: &'a mut Map<String, Value>,
    source: &Map<String, Value>,
) -> &'a mut Map<String, Value> {
    for (key, value) in source {
        if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}
