//! [`Value`] — the dynamically-typed value tree carried across the channel.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use url::Url;

/// A value transportable over the channel wire format.
///
/// Covers the base format's tagged union plus the two extension scalars:
/// - JSON-like primitives (null, bool, numbers, strings, lists, maps)
/// - Binary data and the typed numeric arrays
/// - Big integers carried in hexadecimal string form
/// - An absolute timestamp (milliseconds since the Unix epoch, UTC)
/// - A resource identifier in generic URI syntax
///
/// Map keys are arbitrary values, not just strings; pair order is
/// preserved as written. `Undefined` is produced by the decoder for an
/// extension payload that was consumed but failed semantic validation —
/// it has no wire representation of its own and cannot be encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    /// Decoded-but-invalid slot; not encodable.
    Undefined,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    /// Big integer in hexadecimal string form.
    LargeInt(String),
    Float64(f64),
    Str(String),
    Bytes(Vec<u8>),
    Int32List(Vec<i32>),
    Int64List(Vec<i64>),
    Float64List(Vec<f64>),
    List(Vec<Value>),
    /// Ordered key-value pairs; keys may be any value.
    Map(Vec<(Value, Value)>),
    /// Milliseconds since the Unix epoch, UTC.
    Timestamp(i64),
    Uri(Url),
}

impl Value {
    /// Looks up a string-keyed entry in a [`Value::Map`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(pairs) => pairs.iter().find_map(|(k, v)| match k {
                Value::Str(s) if s == key => Some(v),
                _ => None,
            }),
            _ => None,
        }
    }

    /// True for the two "nothing there" variants.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        Value::Int32(i as i32)
                    } else {
                        Value::Int64(i)
                    }
                } else if let Some(u) = n.as_u64() {
                    Value::LargeInt(format!("{u:x}"))
                } else {
                    Value::Float64(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(arr) => {
                Value::List(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Undefined => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int32(n) => serde_json::json!(n),
            Value::Int64(n) => serde_json::json!(n),
            Value::LargeInt(hex) => serde_json::Value::String(hex),
            Value::Float64(f) => serde_json::json!(f),
            Value::Str(s) => serde_json::Value::String(s),
            Value::Bytes(b) => {
                let b64 = BASE64.encode(&b);
                serde_json::Value::String(format!("data:application/octet-stream;base64,{b64}"))
            }
            Value::Int32List(v) => {
                serde_json::Value::Array(v.into_iter().map(|n| serde_json::json!(n)).collect())
            }
            Value::Int64List(v) => {
                serde_json::Value::Array(v.into_iter().map(|n| serde_json::json!(n)).collect())
            }
            Value::Float64List(v) => {
                serde_json::Value::Array(v.into_iter().map(|n| serde_json::json!(n)).collect())
            }
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(pairs) => serde_json::Value::Object(
                pairs
                    .into_iter()
                    .map(|(k, v)| (json_object_key(&k), serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Timestamp(ms) => serde_json::json!(ms),
            Value::Uri(url) => serde_json::Value::String(url.as_str().to_string()),
        }
    }
}

/// Lossy key coercion for JSON objects: string keys pass through, scalar
/// keys use their canonical text, composite keys fall back to their JSON
/// serialization.
fn json_object_key(key: &Value) -> String {
    match key {
        Value::Str(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Int32(n) => n.to_string(),
        Value::Int64(n) => n.to_string(),
        Value::Float64(f) => f.to_string(),
        Value::LargeInt(hex) => hex.clone(),
        Value::Timestamp(ms) => ms.to_string(),
        Value::Uri(url) => url.as_str().to_string(),
        Value::Null | Value::Undefined => "null".to_string(),
        other => serde_json::Value::from(other.clone()).to_string(),
    }
}
