//! Decoding of store response bodies.
//!
//! The store answers every completed request with one of three JSON object
//! shapes: a success carrying `value` (get/set), a delete confirmation
//! carrying `action`/`key`, or an error object carrying
//! `errorCode`/`message`. This module normalizes all three into the single
//! [`KvResponse`]/[`Error`] pair; the body shape, never the HTTP status,
//! decides the application-level outcome.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::KvResponse;

/// Action the store echoes for a successful delete.
const DELETE_ACTION: &str = "DELETE";

/// Decode a raw response body into the uniform result shape.
///
/// A string `value` takes priority, then a `DELETE` action echo; anything
/// else must be an error object carrying `errorCode` and `message`.
/// Objects matching no known shape decode to [`Error::InvalidErrorBody`].
/// The decoder is a pure function over the input text.
pub fn decode_body(raw: &str) -> Result<KvResponse> {
    let root: Value = serde_json::from_str(raw).map_err(|_| Error::NotJsonObject)?;
    let object = root.as_object().ok_or(Error::NotJsonObject)?;

    // Present on get/set responses and delete echoes alike; never required.
    let index = object.get("index").and_then(Value::as_u64);

    if let Some(value) = object.get("value").and_then(Value::as_str) {
        return Ok(KvResponse {
            value: value.to_string(),
            index,
        });
    }

    if object.get("action").and_then(Value::as_str) == Some(DELETE_ACTION) {
        // The echoed key arrives as a path ("/key1"); strip the separator
        // so delete reports the same shape as get/set.
        if let Some(key) = object.get("key").and_then(Value::as_str) {
            let value = key.strip_prefix('/').unwrap_or(key).to_string();
            return Ok(KvResponse { value, index });
        }
    }

    let code = match object.get("errorCode").and_then(Value::as_i64) {
        Some(code) => code,
        None => return Err(Error::InvalidErrorBody),
    };
    let message = match object.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => return Err(Error::InvalidErrorBody),
    };

    Err(Error::Store { code, message })
}
