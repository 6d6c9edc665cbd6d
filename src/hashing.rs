//! Hashing - SHA-256 over Canonical JSON
//!
//! Release manifests are meant to be reproducible records, so everything
//! is hashed through a canonical (key-sorted, whitespace-free) encoding.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// SHA-256 of raw bytes as a lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Canonical JSON: object keys sorted recursively, compact output.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    serde_json::to_string(&canonicalize(&v))
}

fn canonicalize(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            // BTreeMap iteration gives the sorted key order.
            let sorted: std::collections::BTreeMap<&String, Value> =
                map.iter().map(|(k, v)| (k, canonicalize(v))).collect();
            serde_json::to_value(sorted).unwrap_or_else(|_| v.clone())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(canonicalize).collect()),
        _ => v.clone(),
    }
}

/// SHA-256 of a value's canonical JSON encoding.
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(value)?;
    Ok(sha256_hex(canonical.as_bytes()))
}
