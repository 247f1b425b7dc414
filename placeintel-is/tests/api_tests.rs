//! Integration tests for placeintel-is API endpoints
//!
//! Tests cover:
//! - Health endpoint body
//! - Request validation (missing body, missing/empty place)
//! - Composite response structure and score bounds
//! - Error-boundary behavior for malformed place objects

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use placeintel_is::{build_router, AppState};

/// Test helper: Create app with fresh state
fn setup_app() -> axum::Router {
    build_router(AppState::new())
}

/// Test helper: POST a JSON body to the enhancement endpoint
fn enhance_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/intelligence/enhance")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "PlaceIntel Pro Intelligence Service");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

// =============================================================================
// Request Validation Tests
// =============================================================================

#[tokio::test]
async fn test_missing_body_is_rejected() {
    let app = setup_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/intelligence/enhance")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_invalid_json_is_rejected() {
    let app = setup_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/intelligence/enhance")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_missing_place_is_rejected() {
    let app = setup_app();

    let response = app.oneshot(enhance_request(&json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "No place data provided");
}

#[tokio::test]
async fn test_empty_place_is_rejected() {
    let app = setup_app();

    for place in [json!({"place": {}}), json!({"place": null})] {
        let response = app
            .clone()
            .oneshot(enhance_request(&place))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["error"], "No place data provided");
    }
}

#[tokio::test]
async fn test_malformed_place_is_internal_error() {
    let app = setup_app();

    // Truthy but undecodable: categories must be an array
    let request = enhance_request(&json!({
        "place": {"name": "Cafe", "categories": "coffee"}
    }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Internal server error");
    assert!(body["message"].is_string());
}

// =============================================================================
// Composite Response Tests
// =============================================================================

#[tokio::test]
async fn test_enhance_returns_composite_response() {
    let app = setup_app();

    let request = enhance_request(&json!({
        "place": {
            "name": "Starbucks Downtown",
            "categories": [{"name": "Coffee Shop"}],
            "location": {"lat": 40.7, "lng": -74.0}
        }
    }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;

    for key in [
        "business_intelligence",
        "real_time_context",
        "accessibility_intelligence",
        "unified_recommendations",
        "processing_time_ms",
    ] {
        assert!(body.get(key).is_some(), "missing key {}", key);
    }

    let data_sources = body["data_sources"].as_array().unwrap();
    assert_eq!(data_sources.len(), 4);
    assert_eq!(data_sources[0], "foursquare");

    // Coffee category attributes from the fixed profile table
    let business = &body["business_intelligence"];
    assert_eq!(business["atmosphere"], "cozy");
    assert_eq!(business["price_range"], "moderate");

    // Bounded scores
    let popularity = business["popularity_score"].as_f64().unwrap();
    assert!((1.0..=10.0).contains(&popularity));
    let sentiment = business["sentiment_score"].as_f64().unwrap();
    assert!((1.0..=5.0).contains(&sentiment));
    let trending = business["trending_score"].as_f64().unwrap();
    assert!((0.0..=10.0).contains(&trending));

    let context = &body["real_time_context"];
    let confidence = context["confidence_score"].as_f64().unwrap();
    assert!((0.7..=0.95).contains(&confidence));
    assert!(["open", "closed"].contains(&context["current_status"].as_str().unwrap()));
    assert!(
        ["quiet", "moderate", "busy"].contains(&context["crowd_level"].as_str().unwrap())
    );
}

#[tokio::test]
async fn test_enhance_library_features() {
    let app = setup_app();

    let request = enhance_request(&json!({
        "place": {
            "name": "City Library",
            "categories": [{"name": "Library"}]
        }
    }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let accessibility = &body["accessibility_intelligence"];

    assert_eq!(accessibility["features"]["elevator"], true);
    assert_eq!(accessibility["features"]["braille_signage"], true);
    assert_eq!(accessibility["features"]["hearing_loop"], true);

    let wheelchair = accessibility["wheelchair_accessible"].as_bool().unwrap();
    let score = accessibility["accessibility_score"].as_f64().unwrap();
    assert_eq!(wheelchair, score >= 7.0);

    let notes = body["unified_recommendations"]["accessibility_notes"]
        .as_array()
        .unwrap();
    assert!(!notes.is_empty());
    assert!(notes.len() <= 3);
}

#[tokio::test]
async fn test_enhance_without_categories_uses_defaults() {
    let app = setup_app();

    let request = enhance_request(&json!({
        "place": {"name": "Mystery Spot"}
    }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let business = &body["business_intelligence"];
    assert_eq!(business["price_range"], "unknown");
    assert_eq!(business["atmosphere"], "unknown");
    assert!(business["specialties"].as_array().unwrap().is_empty());
    assert!(business["ideal_for"].as_array().unwrap().is_empty());

    // No category data: accessibility score is exactly the base
    assert_eq!(
        body["accessibility_intelligence"]["accessibility_score"]
            .as_f64()
            .unwrap(),
        5.0
    );

    assert!(body["unified_recommendations"]["alternative_suggestions"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_recommendation_lists_never_exceed_caps() {
    let app = setup_app();

    // Repeat to cover randomized branches
    for _ in 0..25 {
        let request = enhance_request(&json!({
            "place": {
                "name": "Best Premium New Modern Starbucks Center",
                "categories": [{"name": "Coffee Shop"}]
            }
        }));
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = extract_json(response.into_body()).await;
        let unified = &body["unified_recommendations"];
        assert!(unified["personalized_insights"].as_array().unwrap().len() <= 4);
        assert!(unified["alternative_suggestions"].as_array().unwrap().len() <= 3);
        assert!(unified["accessibility_notes"].as_array().unwrap().len() <= 3);
        assert!(unified["optimal_visit_strategy"].is_string());
    }
}
