//! VAPI HTTP Client
//!
//! A small, type-safe client for the parts of the VAPI REST API the voice
//! agent uses.
//!
//! # Example
//!
//! ```no_run
//! use voice_client::VapiClient;
//! use voice_core::dto::call::CreateCall;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = VapiClient::new("https://api.vapi.ai", "sk-...");
//!
//!     let call = client
//!         .create_call(&CreateCall::new(
//!             Some("assistant-id".to_string()),
//!             Some("phone-number-id".to_string()),
//!             "+15551234567",
//!         ))
//!         .await?;
//!
//!     println!("Dialling, call id: {}", call.id);
//!     Ok(())
//! }
//! ```

mod calls;
pub mod error;

pub use calls::CallPlacer;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;
use voice_core::config::VapiSettings;

/// HTTP client for the VAPI API
#[derive(Clone)]
pub struct VapiClient {
    /// Base URL of the API (e.g., "https://api.vapi.ai")
    base_url: String,
    /// Private API key, sent as a bearer token
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for VapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VapiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl VapiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API
    /// * `api_key` - The private API key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(base_url, api_key, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a client from settings
    ///
    /// Fails with a configuration error when the API key is absent. Nothing
    /// is sent over the network.
    pub fn from_settings(settings: &VapiSettings) -> Result<Self> {
        settings.validate()?;
        let api_key = settings.require_api_key()?;

        tracing::debug!("Initializing VAPI client for {}", settings.base_url);

        Ok(Self::new(settings.base_url.as_str(), api_key))
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an API path
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx responses become [`ClientError::ApiError`] carrying the
    /// status and response text.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
