use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonhelper_core::error::{ErrorClass, JsonError};

use crate::json::error_response;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`JsonError`] for transport failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] by writing the standard error
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from one of the JSON helpers.
    #[error(transparent)]
    Json(#[from] JsonError),

    /// The requested resource or route does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Json(err) => {
                let status = json_error_status(err);
                if status.is_server_error() {
                    tracing::error!(error = %err, "JSON transport error");
                    (status, INTERNAL_MESSAGE.to_string())
                } else {
                    (status, err.to_string())
                }
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        error_response(&message, Some(status))
    }
}

/// HTTP status for a [`JsonError`].
///
/// - Oversized bodies map to 413.
/// - Other malformed input maps to 400.
/// - Serialization and transport failures map to 500.
pub fn json_error_status(err: &JsonError) -> StatusCode {
    match (err, err.class()) {
        (JsonError::BodyTooLarge { .. }, _) => StatusCode::PAYLOAD_TOO_LARGE,
        (_, ErrorClass::MalformedInput) => StatusCode::BAD_REQUEST,
        (_, ErrorClass::Serialization | ErrorClass::Transport) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
