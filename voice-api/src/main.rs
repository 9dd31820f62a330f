//! Voice Agent API
//!
//! Minimal HTTP service exposing liveness endpoints.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_core::config::ServerSettings;

pub mod api;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so RUST_LOG from it applies
    let dotenv_result = dotenv::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voice_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = dotenv_result {
        tracing::debug!("No .env file loaded: {}", err);
    }

    tracing::info!("Starting Voice Agent API...");

    let settings = ServerSettings::from_env();
    let app = api::create_router();

    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
