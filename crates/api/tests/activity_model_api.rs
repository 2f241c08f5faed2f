//! Integration tests for the activity model endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, TestWorkspace};

#[tokio::test]
async fn sirna_echoes_primary_sequence() {
    let ws = TestWorkspace::new();
    let response = get(ws.app(), "/ActivityModel/siRNA?PrimarySequence=ACGUACGU").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "INPUT:ACGUACGU");
}

#[tokio::test]
async fn aso_echoes_sequence_and_length() {
    let ws = TestWorkspace::new();
    let response = get(
        ws.app(),
        "/ActivityModel/ASO?PrimarySequence=ACGTACGT&OligoLength=20",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "INPUT:ACGTACGT 20");
}

#[tokio::test]
async fn missing_sequence_is_bad_request() {
    let ws = TestWorkspace::new();
    let response = get(ws.app(), "/ActivityModel/siRNA").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "Missing required query parameter: PrimarySequence"
    );
}

#[tokio::test]
async fn non_numeric_oligo_length_is_bad_request() {
    let ws = TestWorkspace::new();
    let response = get(
        ws.app(),
        "/ActivityModel/ASO?PrimarySequence=ACGT&OligoLength=long",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "OligoLength must be a non-negative integer"
    );
}

#[tokio::test]
async fn activity_model_creates_no_run_directory() {
    let ws = TestWorkspace::new();
    let response = get(ws.app(), "/ActivityModel/siRNA?PrimarySequence=ACGU").await;
    assert_eq!(response.status(), StatusCode::OK);

    let entries = std::fs::read_dir(ws.runs.path()).expect("read runs").count();
    assert_eq!(entries, 0);
}
