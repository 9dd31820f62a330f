//! Call DTOs
//!
//! Request and response bodies for outbound call creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::assistant::AssistantConfig;

/// The party being called
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Destination phone number, E.164 formatted
    pub number: String,
}

/// Request to create an outbound phone call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCall {
    /// Stored assistant that handles the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,

    /// Inline assistant, used in place of a stored one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant: Option<AssistantConfig>,

    /// Vendor-side id of the number the call is placed from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,

    pub customer: Customer,
}

impl CreateCall {
    /// Builds a call handled by a stored assistant
    pub fn new(
        assistant_id: Option<String>,
        phone_number_id: Option<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            assistant_id,
            assistant: None,
            phone_number_id,
            customer: Customer {
                number: destination.into(),
            },
        }
    }

    /// Replaces the stored assistant with an inline one
    pub fn with_assistant(mut self, assistant: AssistantConfig) -> Self {
        self.assistant_id = None;
        self.assistant = Some(assistant);
        self
    }
}

/// A call as returned by the service
///
/// Only `id` is guaranteed; everything else is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, rename = "type")]
    pub call_type: Option<String>,

    /// `None` when absent or not an RFC 3339 timestamp
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}
