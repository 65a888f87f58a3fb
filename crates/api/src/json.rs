//! Read, write, and error helpers for JSON request and response bodies.
//!
//! These are the three operations every handler goes through:
//!
//! - [`read_json`] decodes exactly one JSON value from a request body capped
//!   at [`MAX_BODY_BYTES`].
//! - [`write_json`] serializes a payload and writes it to a [`ResponseSink`]
//!   with a JSON content type.
//! - [`error_json`] writes a [`JsonResponse`] error envelope.
//!
//! None of them log or retry. Every error is returned to the caller.

use std::fmt::Display;

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::de::DeserializeOwned;
use serde::Serialize;

use jsonhelper_core::decode::decode_slice;
pub use jsonhelper_core::decode::MAX_BODY_BYTES;
pub use jsonhelper_core::envelope::JsonResponse;
pub use jsonhelper_core::error::JsonError;

/// Media type set on every response written by [`write_json`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ---------------------------------------------------------------------------
// Response sink
// ---------------------------------------------------------------------------

/// Destination for an outgoing HTTP response.
///
/// Headers are mutable until [`write_status`](Self::write_status) commits
/// them. A sink is written at most once.
pub trait ResponseSink {
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, bytes: Bytes) -> std::io::Result<()>;
}

impl ResponseSink for Response {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        axum::http::Response::headers_mut(self)
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, bytes: Bytes) -> std::io::Result<()> {
        *self.body_mut() = Body::from(bytes);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// Decode a single JSON value from `body`, reading at most
/// [`MAX_BODY_BYTES`].
///
/// The body is consumed either way.
pub async fn read_json<T: DeserializeOwned>(body: Body) -> Result<T, JsonError> {
    read_json_with_limit(body, MAX_BODY_BYTES).await
}

/// Like [`read_json`] with a caller-chosen byte cap.
pub async fn read_json_with_limit<T: DeserializeOwned>(
    body: Body,
    limit: usize,
) -> Result<T, JsonError> {
    let bytes = match Limited::new(body, limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) if exceeds_limit(&*err) => return Err(JsonError::BodyTooLarge { limit }),
        Err(err) => return Err(JsonError::Io(std::io::Error::other(err))),
    };

    decode_slice(&bytes)
}

/// Walk the source chain looking for a body length limit violation.
fn exceeds_limit(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err.is::<LengthLimitError>() {
            return true;
        }
        current = err.source();
    }
    false
}

// ---------------------------------------------------------------------------
// Write
// ---------------------------------------------------------------------------

/// Serialize `payload` and write it to `sink` with the given status.
///
/// Serialization happens before the sink is touched, so a
/// [`JsonError::Serialize`] leaves it untouched. Each key in `headers`
/// replaces every same-named header already on the sink. `Content-Type` is
/// set afterwards, so a caller-supplied content type never survives.
///
/// A [`JsonError::Io`] means the status and headers were already committed.
pub fn write_json<S, T>(
    sink: &mut S,
    status: StatusCode,
    payload: &T,
    headers: Option<&HeaderMap>,
) -> Result<(), JsonError>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    let out = serde_json::to_vec(payload).map_err(JsonError::Serialize)?;

    if let Some(extra) = headers {
        let target = sink.headers_mut();
        for key in extra.keys() {
            target.remove(key);
            for value in extra.get_all(key) {
                target.append(key.clone(), value.clone());
            }
        }
    }

    sink.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    sink.write_status(status);
    sink.write_body(Bytes::from(out))?;

    Ok(())
}

/// Write an error envelope carrying `err`'s message.
///
/// `status` defaults to `400 Bad Request`.
pub fn error_json<S, E>(sink: &mut S, err: &E, status: Option<StatusCode>) -> Result<(), JsonError>
where
    S: ResponseSink + ?Sized,
    E: Display + ?Sized,
{
    let status = status.unwrap_or(StatusCode::BAD_REQUEST);
    let payload = JsonResponse::error(err.to_string());
    write_json(sink, status, &payload, None)
}

// ---------------------------------------------------------------------------
// Response builders
// ---------------------------------------------------------------------------

/// Build a fresh [`Response`] through [`write_json`].
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    payload: &T,
    headers: Option<&HeaderMap>,
) -> Result<Response, JsonError> {
    let mut response = Response::default();
    write_json(&mut response, status, payload, headers)?;
    Ok(response)
}

/// Build a fresh error [`Response`] through [`error_json`].
pub fn error_response<E: Display + ?Sized>(err: &E, status: Option<StatusCode>) -> Response {
    let mut response = Response::default();
    match error_json(&mut response, err, status) {
        Ok(()) => response,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
