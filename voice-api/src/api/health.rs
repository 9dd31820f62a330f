//! Health Check API Handlers
//!
//! Liveness endpoints for monitoring. Both respond with a fixed JSON body.

use axum::Json;
use serde::Serialize;

pub const RUNNING_MESSAGE: &str = "Voice Agent API is running";
pub const HEALTHY_STATUS: &str = "healthy";

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /
/// Reports that the service is up
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: RUNNING_MESSAGE,
    })
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    tracing::trace!("Health check");
    Json(HealthResponse {
        status: HEALTHY_STATUS,
    })
}
