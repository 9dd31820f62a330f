//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod call;

pub use call::CallArgs;

use anyhow::Result;
use clap::Subcommand;
use voice_core::config::VapiSettings;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Place one outbound call
    Call(CallArgs),
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `settings` - VAPI settings loaded from the environment
pub async fn handle_command(command: Commands, settings: &VapiSettings) -> Result<()> {
    match command {
        Commands::Call(args) => call::handle_call_command(args, settings).await,
    }
}
