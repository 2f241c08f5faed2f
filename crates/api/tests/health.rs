//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, get, TestWorkspace};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let ws = TestWorkspace::new();
    let response = get(ws.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["run_dir_writable"], true);

    // The write check cleans up after itself.
    let leftovers = std::fs::read_dir(ws.runs.path()).expect("read runs").count();
    assert_eq!(leftovers, 0);
}

// ---------------------------------------------------------------------------
// Test: a run root that is a file, not a directory, is not writable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_degrades_when_run_root_is_a_file() {
    let ws = TestWorkspace::new();
    let mut config = ws.config();
    let file = ws.scripts.path().join("not-a-dir");
    std::fs::write(&file, "x").expect("write file");
    config.workspace.run_dir = file;

    let app = pfred_api::app::build_app(pfred_api::state::AppState::new(config));
    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["run_dir_writable"], false);
}

// ---------------------------------------------------------------------------
// Test: /health reports degraded when the run root disappears
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_degrades_without_run_dir() {
    let ws = TestWorkspace::new();
    let app = ws.app();
    std::fs::remove_dir(ws.runs.path()).expect("remove runs dir");

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["run_dir_writable"], false);
}

// ---------------------------------------------------------------------------
// Test: GET /Info/Version returns the plain-text version
// ---------------------------------------------------------------------------

#[tokio::test]
async fn version_is_plain_text() {
    let ws = TestWorkspace::new();
    let response = get(ws.app(), "/Info/Version").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .expect("ascii header")
        .to_string();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");
    assert_eq!(body_text(response).await, "1.0.0");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let ws = TestWorkspace::new();
    let response = get(ws.app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let ws = TestWorkspace::new();
    let response = get(ws.app(), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.to_str().expect("ascii header");
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let ws = TestWorkspace::new();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/Info/Version")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .expect("build request");

    let response = ws.app().oneshot(request).await.expect("router is infallible");
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .expect("ascii header");
    assert_eq!(allow_origin, "http://localhost:3000");
}
