//! Inbound payload decoding.
//!
//! Field names match ASCII case-insensitively and unknown fields are
//! ignored, so producers with differing naming conventions (`Location`,
//! `LOCATION`, ...) all decode to the same request. Decoding fails only
//! when the payload is not a JSON object.

use serde_json::Value;

use crate::error::DecodeError;
use crate::models::request::ReportRequest;

/// Decode a raw message payload into a [`ReportRequest`].
///
/// Pure transformation: no side effects, no defaulting beyond leaving
/// absent fields as `None`.
pub fn decode_request(payload: &str) -> Result<ReportRequest, DecodeError> {
    let value: Value = serde_json::from_str(payload)?;
    let Value::Object(map) = value else {
        return Err(DecodeError::NotAnObject);
    };

    let mut request = ReportRequest::default();
    for (key, value) in &map {
        if key.eq_ignore_ascii_case("id") {
            request.id = as_string(value);
        } else if key.eq_ignore_ascii_case("location") {
            request.location = as_string(value);
        } else if key.eq_ignore_ascii_case("status") {
            request.status = as_string(value);
        }
    }

    Ok(request)
}

/// Null or non-string field values decode as absent rather than failing
/// the whole payload.
fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}
