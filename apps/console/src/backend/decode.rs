//! Pure interpretation of backend responses, kept apart from the transport so
//! every status/body combination can be tested without a socket.
//!
//! Message precedence for failures: structured `error` field, then raw body
//! text, then `HTTP <status>`.

use serde_json::Value;

use crate::backend::BackendError;
use crate::models::{JobResult, ParsedResume};

pub const GENERIC_FAILURE: &str = "Request failed";

pub fn decode_parse_resume(status: u16, body: &str) -> Result<ParsedResume, BackendError> {
    let value = decode_success_body(status, body)?;
    if !value.is_object() {
        return Err(malformed(body));
    }
    serde_json::from_value(value).map_err(|_| malformed(body))
}

/// A `null` body is an empty result list; anything else must be an array.
pub fn decode_recommendations(status: u16, body: &str) -> Result<Vec<JobResult>, BackendError> {
    match decode_success_body(status, body)? {
        Value::Null => Ok(Vec::new()),
        value @ Value::Array(_) => serde_json::from_value(value).map_err(|_| malformed(body)),
        _ => Err(malformed(body)),
    }
}

/// Message for a non-2xx response.
pub fn failure_message(status: u16, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(structured_error)
    {
        return message;
    }
    if !body.is_empty() {
        return body.to_string();
    }
    format!("HTTP {status}")
}

/// Reads an `error` field: a non-empty string, or an object carrying a
/// `message` string.
pub fn structured_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from),
        _ => None,
    }
}

pub fn transport_message(error: &reqwest::Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}

fn decode_success_body(status: u16, body: &str) -> Result<Value, BackendError> {
    if !(200..300).contains(&status) {
        return Err(BackendError::Status {
            status,
            message: failure_message(status, body),
        });
    }
    let value: Value = serde_json::from_str(body).map_err(|_| malformed(body))?;
    if let Some(message) = structured_error(&value) {
        return Err(BackendError::Application(message));
    }
    Ok(value)
}

fn malformed(body: &str) -> BackendError {
    BackendError::Malformed(format!("Invalid JSON returned from server: {body}"))
}
