//! placeintel-is library - Place Intelligence Service
//!
//! Stateless enrichment service: one place record in, one composite
//! intelligence record out. Four analysis stages (business, real-time
//! context, accessibility, unified synthesis) run sequentially per request;
//! nothing persists between requests.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod category;
pub mod engines;
pub mod models;

use engines::IntelligencePipeline;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The enrichment pipeline; stateless aside from fixed lookup tables
    pub pipeline: Arc<IntelligencePipeline>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            pipeline: Arc::new(IntelligencePipeline::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health_check))
        .route("/api/v1/intelligence/enhance", post(api::enhance_place))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Enable CORS for browser clients
        .layer(CorsLayer::permissive())
}
