//! Helpers shared by the per-record config validators.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AsrConfigError;

pub(crate) fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Interprets a raw value as a config table. `Null` counts as an omitted
/// section and yields an empty table.
pub(crate) fn as_table(raw: &Value, path: &str) -> Result<Map<String, Value>, AsrConfigError> {
    match raw {
        Value::Object(map) => Ok(map.clone()),
        Value::Null => Ok(Map::new()),
        other => Err(AsrConfigError::invalid(path, other, "expected a table")),
    }
}

/// Reads `key` from a table, coercing the value into `T`. Absent and null
/// keys yield `None` so the caller keeps the declared default.
pub(crate) fn field<T: DeserializeOwned>(
    map: &Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<T>, AsrConfigError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| AsrConfigError::invalid(join(parent, key), value, e)),
    }
}
