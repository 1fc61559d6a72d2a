use crate::error::CoreResult;
use crate::projection::model::ControlGroup;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Compact JSON with object keys sorted at every depth.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> CoreResult<Vec<u8>> {
    let sorted = sort_keys(serde_json::to_value(value)?);
    Ok(serde_json::to_vec(&sorted)?)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Content fingerprint of an ordered projection. Group order and member
/// order both contribute.
pub fn projection_fingerprint(groups: &[ControlGroup]) -> CoreResult<String> {
    Ok(sha256_hex(&to_canonical_bytes(&groups)?))
}
