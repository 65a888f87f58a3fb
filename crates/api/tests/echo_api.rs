//! Integration tests for the echo and health endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_raw};
use serde_json::json;

use jsonhelper_api::json::MAX_BODY_BYTES;

// ---------------------------------------------------------------------------
// Test: GET /health returns the success envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_envelope() {
    let response = get(common::build_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");

    let json = body_json(response).await;
    assert_eq!(json["error"], false);
    assert_eq!(json["message"], "");
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/echo round-trips a single value
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_returns_the_payload_in_the_envelope() {
    let payload = json!({ "name": "widget", "tags": ["a", "b"], "count": 3, "ok": null });
    let response = post_raw(
        common::build_test_app(),
        "/api/v1/echo",
        payload.to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let expected_len = serde_json::to_vec(&payload).unwrap().len().to_string();
    assert_eq!(response.headers()["x-echo-bytes"], expected_len.as_str());
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": false, "message": "", "data": payload }));
}

// ---------------------------------------------------------------------------
// Test: a null body echoes back with no data key
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_of_null_omits_data() {
    let response = post_raw(common::build_test_app(), "/api/v1/echo", "null").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-echo-bytes"], "4");

    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": false, "message": "" }));
}

// ---------------------------------------------------------------------------
// Test: trailing content is rejected with 400 and the error envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_rejects_multiple_values() {
    let response = post_raw(
        common::build_test_app(),
        "/api/v1/echo",
        r#"{"a":1}{"b":2}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({ "error": true, "message": "body must have only a single JSON value" })
    );
}

// ---------------------------------------------------------------------------
// Test: malformed JSON is rejected with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_rejects_malformed_json() {
    let response = post_raw(common::build_test_app(), "/api/v1/echo", "{nope}").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("body contains badly-formed JSON"));
    assert!(json.get("data").is_none());
}

// ---------------------------------------------------------------------------
// Test: oversized bodies are rejected with 413
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_rejects_oversized_body() {
    let mut body = b"\"".to_vec();
    body.resize(MAX_BODY_BYTES + 16, b'x');
    body.push(b'"');

    let response = post_raw(common::build_test_app(), "/api/v1/echo", body).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(
        json["message"],
        format!("body must not be larger than {MAX_BODY_BYTES} bytes")
    );
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404 with the error envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let response = get(common::build_test_app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": true, "message": "route not found" }));
}
