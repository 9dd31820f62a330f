//! Configuration
//!
//! Settings for the call demo and the HTTP stub service. Both are read once
//! at start-up and passed explicitly to whatever needs them.

use thiserror::Error;

/// Default VAPI REST endpoint
pub const DEFAULT_VAPI_BASE_URL: &str = "https://api.vapi.ai";

/// Default listen address of the HTTP stub service
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const VAPI_API_KEY: &str = "VAPI_API_KEY";
pub const ASSISTANT_ID: &str = "ASSISTANT_ID";
pub const VAPI_NUMBER_ID: &str = "VAPI_NUMBER_ID";
pub const VAPI_BASE_URL: &str = "VAPI_BASE_URL";
pub const VOICE_API_BIND_ADDR: &str = "VOICE_API_BIND_ADDR";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("VAPI_API_KEY not found in environment variables")]
    MissingApiKey,

    #[error("VAPI base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

/// Settings for talking to the VAPI service
///
/// Only the API key is checked, and only when a client is built from these
/// settings. The assistant and phone-number ids are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VapiSettings {
    pub api_key: Option<String>,
    pub assistant_id: Option<String>,
    pub phone_number_id: Option<String>,
    pub base_url: String,
}

impl VapiSettings {
    /// Reads settings from the process environment
    ///
    /// Expected environment variables:
    /// - VAPI_API_KEY (required to place calls)
    /// - ASSISTANT_ID (optional)
    /// - VAPI_NUMBER_ID (optional)
    /// - VAPI_BASE_URL (optional, default: https://api.vapi.ai)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup(VAPI_API_KEY),
            assistant_id: lookup(ASSISTANT_ID),
            phone_number_id: lookup(VAPI_NUMBER_ID),
            base_url: lookup(VAPI_BASE_URL)
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_VAPI_BASE_URL.to_string()),
        }
    }

    /// Returns the API key, or a configuration error if it is absent or empty
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// Validates everything a client needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.require_api_key()?;

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }

        Ok(())
    }
}

impl Default for VapiSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Settings for the HTTP stub service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl ServerSettings {
    /// Reads VOICE_API_BIND_ADDR, falling back to 0.0.0.0:8000
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bind_addr: lookup(VOICE_API_BIND_ADDR)
                .filter(|addr| !addr.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}
