//! Call-related API endpoints

use async_trait::async_trait;
use voice_core::dto::call::{Call, CreateCall};

use crate::VapiClient;
use crate::error::{ClientError, Result};

/// Anything that can place an outbound call
///
/// Implemented by [`VapiClient`]; callers take `&dyn CallPlacer` so a fake
/// can stand in for the service.
#[async_trait]
pub trait CallPlacer: Send + Sync {
    async fn create_call(&self, request: &CreateCall) -> Result<Call>;
}

#[async_trait]
impl CallPlacer for VapiClient {
    async fn create_call(&self, request: &CreateCall) -> Result<Call> {
        VapiClient::create_call(self, request).await
    }
}

impl VapiClient {
    /// Create an outbound phone call
    ///
    /// # Arguments
    /// * `request` - Assistant, source number and destination of the call
    ///
    /// # Returns
    /// The call as created by the service; `id` identifies it from then on
    ///
    /// # Example
    /// ```no_run
    /// # use voice_client::VapiClient;
    /// # use voice_core::dto::call::CreateCall;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = VapiClient::new("https://api.vapi.ai", "sk-...");
    /// let call = client
    ///     .create_call(&CreateCall::new(None, None, "+15551234567"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_call(&self, request: &CreateCall) -> Result<Call> {
        if request.customer.number.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "destination number is required".to_string(),
            ));
        }

        let url = self.url("call");
        tracing::debug!("POST {} (to {})", url, request.customer.number);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let call: Call = self.handle_response(response).await?;
        tracing::info!("Created call {}", call.id);

        Ok(call)
    }
}
