pub mod echo;
pub mod health;

use axum::Router;

use crate::error::AppError;

/// Routes mounted under `/api/v1`.
pub fn api_routes() -> Router {
    Router::new().merge(echo::router())
}

/// Fallback for unmatched paths, rendered as an error envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound("route not found".into())
}
