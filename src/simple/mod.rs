//! Resource facades over the core [`ApiClient`](crate::ApiClient)
//!
//! Thin call-forwarding layers that interpolate endpoint paths, wrap request
//! bodies under the resource's singular key and unwrap the single top-level
//! key from decoded responses. All JSON stays dynamic
//! ([`serde_json::Value`]); the mite API is a map-shaped contract.

/// Account, customer, project, service, time entry and user resources
pub mod api;
/// Time tracker resource
pub mod tracker;

pub use api::SimpleApi;
pub use tracker::SimpleTracker;

use serde_json::Value;

use crate::error::Error;

/// Wraps `data` under a single key, e.g. `{"customer": {...}}`.
fn wrap(key: &str, data: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(key.to_owned(), data);
    Value::Object(map)
}

/// Unwraps the single top-level key of a decoded response object.
fn unwrap(value: Value) -> Result<Value, Error> {
    match value {
        Value::Object(map) => map.into_iter().next().map(|(_, inner)| inner).ok_or_else(|| {
            Error::InvalidArgument("expected a non-empty JSON object in the response".into())
        }),
        _ => Err(Error::InvalidArgument(
            "expected a JSON object in the response".into(),
        )),
    }
}

/// Flattens a list of single-key wrapper objects by extracting `column`,
/// skipping rows that lack it.
fn pluck(rows: &Value, column: &str) -> Vec<Value> {
    rows.as_array().map_or_else(Vec::new, |rows| {
        rows.iter()
            .filter_map(|row| row.get(column))
            .cloned()
            .collect()
    })
}
