//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_app_with, build_test_app, get};
use scoreboard_core::error::CoreError;
use scoreboard_core::scoring::memory::{InMemoryFailStore, InMemoryPassStore};
use scoreboard_core::scoring::{CreateScoreSubmission, ScoreSubmission, ScoreSubmissionStore};
use tower::ServiceExt;

/// Submission store whose ping always fails.
struct DownSubmissionStore;

#[async_trait]
impl ScoreSubmissionStore for DownSubmissionStore {
    async fn save(&self, _input: CreateScoreSubmission) -> Result<ScoreSubmission, CoreError> {
        Err(CoreError::Storage("down".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<ScoreSubmission>, CoreError> {
        Err(CoreError::Storage("down".to_string()))
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Err(CoreError::Storage("down".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _stores) = build_test_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: unreachable store reports degraded
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = build_app_with(
        Arc::new(DownSubmissionStore),
        Arc::new(InMemoryPassStore::new()),
        Arc::new(InMemoryFailStore::new()),
    );
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _stores) = build_test_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: wrong method on a known route returns 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_on_score_route_returns_405() {
    let (app, _stores) = build_test_app();
    let response = get(app, "/exam/examA/score").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _stores) = build_test_app();
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let (app, _stores) = build_test_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/exam/examA/score")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PUT"),
        "Allow-Methods should contain PUT, got: {allow_methods}"
    );
}
