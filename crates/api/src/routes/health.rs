use axum::http::StatusCode;
use axum::response::Response;
use axum::{routing::get, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::json::{json_response, JsonResponse};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> AppResult<Response> {
    let body = JsonResponse::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    });
    Ok(json_response(StatusCode::OK, &body, None)?)
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
