//! Voice Agent CLI
//!
//! Command-line demo for placing outbound calls through VAPI.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_core::config::VapiSettings;

#[derive(Parser)]
#[command(name = "voice-agent")]
#[command(about = "Voice Agent outbound call demo", long_about = None)]
struct Cli {
    /// VAPI API base URL
    #[arg(long, env = "VAPI_BASE_URL", default_value = voice_core::config::DEFAULT_VAPI_BASE_URL)]
    vapi_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env first so RUST_LOG and clap's env fallbacks can see it
    let dotenv_result = dotenv::dotenv();

    // Logs go to stderr; stdout carries the demo output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voice_cli=warn,voice_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = dotenv_result {
        tracing::debug!("No .env file loaded: {}", err);
    }

    let cli = Cli::parse();

    let settings = VapiSettings {
        base_url: cli.vapi_url,
        ..VapiSettings::from_env()
    };

    handle_command(cli.command, &settings).await
}
