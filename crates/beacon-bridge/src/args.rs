//! Argument extraction from a call's argument map.
//!
//! Missing and null arguments are interchangeable: required extractors
//! reject both, the `_or`/`_or_empty` extractors substitute a default
//! for both.

use beacon_codec::Value;
use serde_json::Value as JsonValue;

use crate::client::Properties;
use crate::error::BridgeError;
use crate::helper::to_json_object;

fn lookup<'a>(args: &'a Value, name: &str) -> Option<&'a Value> {
    match args.get(name) {
        Some(value) if !value.is_null() => Some(value),
        _ => None,
    }
}

pub fn string(args: &Value, name: &str) -> Result<String, BridgeError> {
    match lookup(args, name) {
        Some(Value::Str(s)) => Ok(s.clone()),
        Some(_) => Err(BridgeError::InvalidArgument {
            name: name.to_string(),
            expected: "string",
        }),
        None => Err(BridgeError::MissingArgument(name.to_string())),
    }
}

pub fn boolean(args: &Value, name: &str) -> Result<bool, BridgeError> {
    match lookup(args, name) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(BridgeError::InvalidArgument {
            name: name.to_string(),
            expected: "bool",
        }),
        None => Err(BridgeError::MissingArgument(name.to_string())),
    }
}

pub fn boolean_or(args: &Value, name: &str, default: bool) -> Result<bool, BridgeError> {
    match lookup(args, name) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(BridgeError::InvalidArgument {
            name: name.to_string(),
            expected: "bool",
        }),
        None => Ok(default),
    }
}

pub fn int32(args: &Value, name: &str) -> Result<i32, BridgeError> {
    match lookup(args, name) {
        Some(Value::Int32(n)) => Ok(*n),
        Some(_) => Err(BridgeError::InvalidArgument {
            name: name.to_string(),
            expected: "int32",
        }),
        None => Err(BridgeError::MissingArgument(name.to_string())),
    }
}

/// Numeric argument; integer values are accepted where a double is
/// expected, since the runtime may narrow whole doubles in transit.
pub fn float64(args: &Value, name: &str) -> Result<f64, BridgeError> {
    match lookup(args, name) {
        Some(Value::Float64(f)) => Ok(*f),
        Some(Value::Int32(n)) => Ok(*n as f64),
        Some(Value::Int64(n)) => Ok(*n as f64),
        Some(_) => Err(BridgeError::InvalidArgument {
            name: name.to_string(),
            expected: "number",
        }),
        None => Err(BridgeError::MissingArgument(name.to_string())),
    }
}

/// A property map argument; missing or null substitutes an empty map.
pub fn object_or_empty(args: &Value, name: &str) -> Result<Properties, BridgeError> {
    match lookup(args, name) {
        Some(map @ Value::Map(_)) => to_json_object(map),
        Some(_) => Err(BridgeError::InvalidArgument {
            name: name.to_string(),
            expected: "map",
        }),
        None => Ok(Properties::new()),
    }
}

pub fn array(args: &Value, name: &str) -> Result<Vec<JsonValue>, BridgeError> {
    match lookup(args, name) {
        Some(Value::List(items)) => {
            Ok(items.iter().map(|v| JsonValue::from(v.clone())).collect())
        }
        Some(_) => Err(BridgeError::InvalidArgument {
            name: name.to_string(),
            expected: "list",
        }),
        None => Err(BridgeError::MissingArgument(name.to_string())),
    }
}

/// Any argument as JSON; missing maps to null.
pub fn json(args: &Value, name: &str) -> JsonValue {
    match lookup(args, name) {
        Some(value) => JsonValue::from(value.clone()),
        None => JsonValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Value {
        Value::Map(vec![
            (Value::Str("name".into()), Value::Str("plan".into())),
            (Value::Str("flag".into()), Value::Bool(true)),
            (Value::Str("count".into()), Value::Int32(5)),
            (Value::Str("amount".into()), Value::Float64(2.5)),
            (Value::Str("nothing".into()), Value::Null),
        ])
    }

    #[test]
    fn required_string() {
        assert_eq!(string(&args(), "name"), Ok("plan".into()));
        assert_eq!(
            string(&args(), "missing"),
            Err(BridgeError::MissingArgument("missing".into()))
        );
        // An explicit null is as missing as an absent key.
        assert_eq!(
            string(&args(), "nothing"),
            Err(BridgeError::MissingArgument("nothing".into()))
        );
    }

    #[test]
    fn wrong_type_is_invalid() {
        assert_eq!(
            string(&args(), "flag"),
            Err(BridgeError::InvalidArgument {
                name: "flag".into(),
                expected: "string"
            })
        );
    }

    #[test]
    fn boolean_defaults() {
        assert_eq!(boolean_or(&args(), "flag", false), Ok(true));
        assert_eq!(boolean_or(&args(), "missing", false), Ok(false));
        assert_eq!(boolean_or(&args(), "nothing", true), Ok(true));
    }

    #[test]
    fn numbers() {
        assert_eq!(int32(&args(), "count"), Ok(5));
        assert_eq!(float64(&args(), "amount"), Ok(2.5));
        assert_eq!(float64(&args(), "count"), Ok(5.0));
    }

    #[test]
    fn object_or_empty_defaults_missing_and_null() {
        assert_eq!(object_or_empty(&args(), "missing"), Ok(Properties::new()));
        assert_eq!(object_or_empty(&args(), "nothing"), Ok(Properties::new()));
        assert_eq!(
            object_or_empty(&args(), "count"),
            Err(BridgeError::InvalidArgument {
                name: "count".into(),
                expected: "map"
            })
        );
    }
}
