//! Property-map helpers shared by the dispatch handlers.

use beacon_codec::Value;
use serde_json::Value as JsonValue;

use crate::client::Properties;
use crate::error::BridgeError;

/// Merges the runtime's library properties into a call's property
/// payload. Library entries win on key collision.
pub fn merged_properties(mut properties: Properties, library: &Properties) -> Properties {
    for (key, value) in library {
        properties.insert(key.clone(), value.clone());
    }
    properties
}

/// Converts a decoded [`Value::Map`] into a JSON object. Property maps
/// crossing the client boundary must be string-keyed.
pub fn to_json_object(value: &Value) -> Result<Properties, BridgeError> {
    match value {
        Value::Map(pairs) => pairs
            .iter()
            .map(|(key, val)| match key {
                Value::Str(s) => Ok((s.clone(), JsonValue::from(val.clone()))),
                _ => Err(BridgeError::NonStringPropertyKey),
            })
            .collect(),
        _ => Err(BridgeError::NonStringPropertyKey),
    }
}
