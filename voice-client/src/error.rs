//! Error types for the VAPI client

use thiserror::Error;
use voice_core::config::ConfigError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the VAPI client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client could not be configured
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(reqwest::Error),

    /// The service could not be reached (connection refused, timeout, ...)
    #[error("{0}")]
    Network(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Network(err.to_string())
        } else {
            Self::RequestFailed(err)
        }
    }
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error comes from configuration rather than the network
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if the API rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let unauthorized = ClientError::api_error(401, "Invalid Key");
        assert!(unauthorized.is_unauthorized());
        assert!(unauthorized.is_client_error());
        assert!(!unauthorized.is_server_error());

        let unavailable = ClientError::api_error(503, "Service Unavailable");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());
        assert!(!unavailable.is_unauthorized());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ClientError::api_error(400, "bad number").to_string(),
            "API error (status 400): bad number"
        );
        assert_eq!(
            ClientError::Network("network unreachable".to_string()).to_string(),
            "network unreachable"
        );
        assert_eq!(
            ClientError::from(ConfigError::MissingApiKey).to_string(),
            "VAPI_API_KEY not found in environment variables"
        );
    }
}
