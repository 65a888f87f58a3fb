//! Echo endpoint: reads one JSON value and writes it back in the envelope.

use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::Response;
use axum::{routing::post, Router};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::SingleJson;
use crate::json::{json_response, JsonResponse};

/// Response header carrying the length of the re-serialized payload.
pub const ECHO_BYTES_HEADER: &str = "x-echo-bytes";

async fn echo(SingleJson(payload): SingleJson<Value>) -> AppResult<Response> {
    let encoded_len = serde_json::to_vec(&payload)
        .map_err(|e| AppError::InternalError(e.to_string()))?
        .len();

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(ECHO_BYTES_HEADER),
        HeaderValue::from(encoded_len),
    );

    tracing::debug!(bytes = encoded_len, "Echoing JSON payload");

    Ok(json_response(
        StatusCode::OK,
        &JsonResponse::ok(payload),
        Some(&headers),
    )?)
}

pub fn router() -> Router {
    Router::new().route("/echo", post(echo))
}
