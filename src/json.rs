//! Strict JSON encode/decode helpers.
//!
//! Every failure surfaces as [`Error::InvalidArgument`] carrying the
//! underlying serde diagnostic; nothing in this module returns a partial or
//! best-effort result. The one sanctioned exception is [`is_valid`], whose
//! contract is explicitly boolean-returning.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Tuning knobs for [`encode_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Render with indentation and newlines instead of the compact default.
    pub pretty: bool,
}

/// Serializes a value to a compact JSON string.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] with the serializer's diagnostic when
/// the value cannot be represented as JSON (e.g. a map with non-string keys
/// or a non-finite float).
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    encode_with(value, &EncodeOptions::default())
}

/// Serializes a value with explicit options.
///
/// # Errors
///
/// Same contract as [`encode`].
pub fn encode_with<T: Serialize + ?Sized>(
    value: &T,
    options: &EncodeOptions,
) -> Result<String, Error> {
    let result = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    result.map_err(|e| Error::InvalidArgument(format!("json encode error: {e}")))
}

/// Serializes a value to an indented JSON string.
///
/// # Errors
///
/// Same contract as [`encode`].
pub fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    encode_with(value, &EncodeOptions { pretty: true })
}

/// Parses a JSON document into a dynamic [`Value`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] with the parser's diagnostic on
/// malformed input.
pub fn decode(json: &str) -> Result<Value, Error> {
    decode_as(json)
}

/// Parses a JSON document into `T`.
///
/// # Errors
///
/// Same contract as [`decode`].
pub fn decode_as<T: DeserializeOwned>(json: &str) -> Result<T, Error> {
    serde_json::from_str(json).map_err(|e| Error::InvalidArgument(format!("json decode error: {e}")))
}

/// Whether the input is a syntactically valid JSON document.
///
/// Never fails; a decode failure here is swallowed by contract.
#[must_use]
pub fn is_valid(json: &str) -> bool {
    decode(json).is_ok()
}
