//! Health check endpoint

use axum::Json;
use placeintel_common::time::utc_timestamp;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

/// GET /health
///
/// Liveness probe for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: utc_timestamp(),
        service: "PlaceIntel Pro Intelligence Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
