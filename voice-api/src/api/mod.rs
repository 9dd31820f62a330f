//! API Module
//!
//! HTTP API layer for the Voice Agent service.

pub mod health;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Create the main API router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
}
