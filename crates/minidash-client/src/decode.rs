//! Metrics payload decoding.
//!
//! The endpoint returns a JSON array of records, or `null` when the
//! underlying query matched nothing. Each entry is checked against the
//! [`MetricRecord`] schema individually so a rejection can name the entry.

use minidash_common::types::{MetricRecord, MetricsCollection};
use serde_json::Value;

use crate::error::FetchError;

/// Decodes a response body into a metrics collection.
///
/// Unknown fields on an entry are ignored. A `null` body yields an empty
/// collection.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not JSON or not an array,
/// and `FetchError::InvalidRecord` for the first entry missing a field or
/// carrying a field of the wrong type.
pub fn decode_metrics(body: &[u8]) -> Result<MetricsCollection, FetchError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| FetchError::Decode {
        message: e.to_string(),
    })?;

    let entries = match value {
        Value::Null => return Ok(MetricsCollection::new()),
        Value::Array(entries) => entries,
        other => {
            return Err(FetchError::Decode {
                message: format!("expected an array, found {}", json_kind(&other)),
            });
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<MetricRecord>(entry).map_err(|e| {
                FetchError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
