//! Canonical JSON helpers for validation reports.

use std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zoo_core::{ErrorInfo, ZooError};

fn serde_error(code: &str, err: impl ToString) -> ZooError {
    ZooError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Recursively sorts object keys so equal reports serialize identically.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, val)| (key, canonicalize(val)))
                .collect();
            Value::Object(ordered.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a report into canonical JSON bytes with deterministic key order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, ZooError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    serde_json::to_vec(&canonicalize(value)).map_err(|err| serde_error("json-write", err))
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, ZooError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_bytes_are_key_sorted() {
        let value = serde_json::json!({"zeta": 1, "alpha": {"nested": [3, 2]}, "mid": null});
        let bytes = to_canonical_json_bytes(&value).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, r#"{"alpha":{"nested":[3,2]},"mid":null,"zeta":1}"#);
    }

    #[test]
    fn round_trip_through_bytes() {
        let value = serde_json::json!({"renormalizability": "Renorm"});
        let bytes = to_canonical_json_bytes(&value).unwrap();
        let back: serde_json::Value = from_json_slice(&bytes).unwrap();
        assert_eq!(back, value);
    }
}
