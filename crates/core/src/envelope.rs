//! The standard wrapper placed around every JSON response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// True when the payload is absent or would serialize to JSON `null`.
///
/// A payload that fails to convert is kept so the real serialization
/// reports the error.
fn is_absent<T: Serialize>(data: &Option<T>) -> bool {
    match data {
        None => true,
        Some(value) => matches!(serde_json::to_value(value), Ok(Value::Null)),
    }
}

/// Response envelope: `{ "error": bool, "message": string, "data": T }`.
///
/// `data` is omitted from the serialized form when it is `None` or a `null`
/// payload, so an error envelope renders as `{"error":true,"message":"..."}`. Built fresh for each
/// outgoing response and serialized once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResponse<T = Value> {
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub data: Option<T>,
}

impl<T> JsonResponse<T> {
    /// Success envelope carrying `data` and an empty message.
    pub fn ok(data: T) -> Self {
        Self {
            error: false,
            message: String::new(),
            data: Some(data),
        }
    }
}

impl JsonResponse {
    /// Failure envelope with the given message and no data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
        }
    }
}
