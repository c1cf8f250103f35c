//! Integration tests for the Stock Analysis Agent

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::{Request, StatusCode};
use proptest::prelude::*;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stock_analysis::{
    analyze, create_router, health_check, validate, AnalysisEngine, AnalysisRequest,
    AnalysisResponse, AppState, DataServiceClient, DatabaseStatus,
};

fn state(database_connected: bool) -> Arc<AppState> {
    Arc::new(AppState::new(database_connected))
}

fn post_analyze(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

// --- Validation scenarios ---

#[test]
fn test_valid_ticker_validates_and_echoes() {
    let request = validate(&json!({"ticker": "AAPL"})).unwrap();
    assert_eq!(request.ticker(), "AAPL");
}

#[test]
fn test_lowercase_ticker_fails_validation() {
    assert!(validate(&json!({"ticker": "aapl"})).is_err());
}

#[test]
fn test_too_long_ticker_fails_validation() {
    assert!(validate(&json!({"ticker": "TOOLONG"})).is_err());
}

#[test]
fn test_missing_ticker_fails_validation() {
    assert!(validate(&json!({})).is_err());
}

#[test]
fn test_validate_is_idempotent() {
    let body = json!({"ticker": "NVDA"});
    assert_eq!(validate(&body).unwrap(), validate(&body).unwrap());

    let bad = json!({"ticker": "nvda"});
    assert_eq!(
        validate(&bad).unwrap_err().to_string(),
        validate(&bad).unwrap_err().to_string()
    );
}

proptest! {
    #[test]
    fn prop_matching_tickers_always_validate(ticker in "[A-Z]{1,5}") {
        let body = json!({ "ticker": ticker.as_str() });
        let request = validate(&body).unwrap();
        prop_assert_eq!(request.ticker(), ticker.as_str());
    }

    #[test]
    fn prop_lowercase_never_validates(ticker in "[a-z]{1,5}") {
        let body = json!({ "ticker": ticker });
        prop_assert!(validate(&body).is_err());
    }

    #[test]
    fn prop_overlong_never_validates(ticker in "[A-Z]{6,12}") {
        let body = json!({ "ticker": ticker });
        prop_assert!(validate(&body).is_err());
    }

    #[test]
    fn prop_digits_and_symbols_never_validate(ticker in "[0-9!@#$%^&*._-]{1,5}") {
        let body = json!({ "ticker": ticker });
        prop_assert!(validate(&body).is_err());
    }
}

// --- Response contract ---

#[test]
fn test_response_round_trip_preserves_fields() {
    let response = AnalysisResponse::new("AAPL", "BUY", 0.91, 0.88, 0.94, "Strong placeholder");
    let wire = serde_json::to_string(&response).unwrap();
    let back: AnalysisResponse = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, response);
}

#[test]
fn test_engine_is_deterministic_per_ticker() {
    let engine = AnalysisEngine::new();
    let request = AnalysisRequest::new("MSFT").unwrap();
    assert_eq!(engine.analyze(&request), engine.analyze(&request));
    assert_eq!(engine.analyze(&request).ticker, "MSFT");
}

// --- HTTP surface ---

#[tokio::test]
async fn test_post_analyze_returns_200_for_valid_body() {
    let router = create_router(state(true));
    let response = router
        .oneshot(post_analyze(r#"{"ticker":"AAPL"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_post_analyze_returns_422_for_invalid_ticker() {
    let router = create_router(state(true));
    let response = router
        .oneshot(post_analyze(r#"{"ticker":"aapl"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_post_analyze_returns_422_for_missing_field() {
    let router = create_router(state(true));
    let response = router.oneshot(post_analyze(r#"{}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_post_analyze_returns_client_error_for_malformed_json() {
    // Truncated body with a JSON content-type: the extractor must reject
    // it with a client error, never crash the process.
    let router = create_router(state(true));
    let response = router
        .oneshot(post_analyze(r#"{"ticker": "#))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_post_analyze_rejects_non_json_content_type() {
    let router = create_router(state(true));
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "text/plain")
        .body(Body::from("ticker=AAPL"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_get_health_returns_200() {
    let router = create_router(state(false));
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_analyze_handler_echoes_ticker_in_body() {
    let Json(response) = analyze(State(state(true)), Json(json!({"ticker": "GOOGL"})))
        .await
        .unwrap();
    assert_eq!(response.ticker, "GOOGL");
    assert!(!response.verdict.is_empty());
    assert!(!response.reasoning.is_empty());
}

#[tokio::test]
async fn test_health_reports_disconnected_before_connectivity() {
    // Scenario: no successful ping has happened yet.
    let Json(response) = health_check(State(state(false))).await;
    assert_eq!(response.status, "online");
    assert_eq!(response.database, DatabaseStatus::Disconnected);
}

#[tokio::test]
async fn test_health_reports_connected_after_ping_success() {
    let Json(response) = health_check(State(state(true))).await;
    assert_eq!(response.database, DatabaseStatus::Connected);
}

// --- Data service client ---

#[tokio::test]
async fn test_ping_succeeds_against_healthy_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = DataServiceClient::new(server.uri(), 1000);
    assert!(client.ping().await.is_ok());
}

#[tokio::test]
async fn test_ping_fails_against_unhealthy_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = DataServiceClient::new(server.uri(), 1000);
    assert!(client.ping().await.is_err());
}

#[tokio::test]
async fn test_ping_fails_against_unreachable_service() {
    // RFC 5737 TEST-NET address, nothing listens there.
    let client = DataServiceClient::new("http://192.0.2.1:12345", 100);
    assert!(client.ping().await.is_err());
}
