//! Call command handlers
//!
//! Initializes the VAPI client, places a single outbound call and prints
//! the outcome. Failures are printed, never propagated: the process exits
//! normally either way.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::*;
use thiserror::Error;
use voice_client::{CallPlacer, ClientError, VapiClient};
use voice_core::assistant::design_assistant;
use voice_core::config::{ConfigError, VapiSettings};
use voice_core::dto::call::{Call, CreateCall};

/// Arguments of `voice-agent call`
#[derive(Args, Debug, Clone, Default)]
pub struct CallArgs {
    /// Destination phone number (E.164, e.g. +15551234567)
    #[arg(long, env = "VAPI_DESTINATION_NUMBER")]
    pub to: String,

    /// Stored assistant to use instead of ASSISTANT_ID
    #[arg(long)]
    pub assistant_id: Option<String>,

    /// Source phone-number id to use instead of VAPI_NUMBER_ID
    #[arg(long)]
    pub number_id: Option<String>,

    /// Whiteboard design JSON; places the call with an inline design assistant
    #[arg(long)]
    pub design: Option<PathBuf>,
}

/// Why a call could not be placed
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(ClientError),

    #[error("Failed to load design from {}: {reason}", path.display())]
    Design { path: PathBuf, reason: String },
}

impl From<ClientError> for CallError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Config(err) => Self::Config(err),
            other => Self::Client(other),
        }
    }
}

/// Handle `voice-agent call`
pub async fn handle_call_command(args: CallArgs, settings: &VapiSettings) -> Result<()> {
    run_demo(settings, &args, &mut io::stdout().lock()).await?;
    Ok(())
}

/// Build a client from settings; no request is made
pub fn initialize_client(settings: &VapiSettings) -> std::result::Result<VapiClient, CallError> {
    Ok(VapiClient::from_settings(settings)?)
}

/// Combine settings and arguments into a call request
///
/// Flags win over environment values. With `--design`, the stored
/// assistant is replaced by an inline one built from the design file.
pub fn build_request(
    settings: &VapiSettings,
    args: &CallArgs,
) -> std::result::Result<CreateCall, CallError> {
    let request = CreateCall::new(
        args.assistant_id
            .clone()
            .or_else(|| settings.assistant_id.clone()),
        args.number_id
            .clone()
            .or_else(|| settings.phone_number_id.clone()),
        args.to.as_str(),
    );

    let Some(path) = &args.design else {
        return Ok(request);
    };

    let design_error = |reason: String| CallError::Design {
        path: path.clone(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| design_error(e.to_string()))?;
    let design: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| design_error(e.to_string()))?;

    Ok(request.with_assistant(design_assistant(&design)))
}

/// Place a call and return what happened
pub async fn place_call(
    placer: &dyn CallPlacer,
    request: &CreateCall,
) -> std::result::Result<Call, CallError> {
    Ok(placer.create_call(request).await?)
}

/// Initialize the client, then dial
///
/// A configuration error is reported without attempting the call.
pub async fn run_demo<W: Write>(
    settings: &VapiSettings,
    args: &CallArgs,
    out: &mut W,
) -> io::Result<()> {
    let client = match initialize_client(settings) {
        Ok(client) => client,
        Err(err) => return report_error(out, &err),
    };
    writeln!(out, "{}", "VAPI client initialized successfully".green())?;

    dial(&client, settings, args, out).await
}

/// Place the call through `placer` and print the outcome
pub async fn dial<W: Write>(
    placer: &dyn CallPlacer,
    settings: &VapiSettings,
    args: &CallArgs,
    out: &mut W,
) -> io::Result<()> {
    let outcome = match build_request(settings, args) {
        Ok(request) => place_call(placer, &request).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(call) => writeln!(out, "{}", format!("Dialling, call id: {}", call.id).bold()),
        Err(err) => report_error(out, &err),
    }
}

fn report_error<W: Write>(out: &mut W, err: &CallError) -> io::Result<()> {
    tracing::debug!("Call failed: {:?}", err);
    writeln!(out, "{}", format!("Error: {}", err).red())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Placer that answers every request with a fixed outcome
    struct FakePlacer {
        outcome: fn() -> voice_client::Result<Call>,
        calls: AtomicUsize,
    }

    impl FakePlacer {
        fn new(outcome: fn() -> voice_client::Result<Call>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CallPlacer for FakePlacer {
        async fn create_call(&self, _request: &CreateCall) -> voice_client::Result<Call> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn call_123() -> voice_client::Result<Call> {
        Ok(serde_json::from_value(json!({ "id": "call_123" })).unwrap())
    }

    fn unreachable() -> voice_client::Result<Call> {
        Err(ClientError::Network("network unreachable".to_string()))
    }

    fn settings(api_key: Option<&str>, base_url: &str) -> VapiSettings {
        VapiSettings {
            api_key: api_key.map(str::to_string),
            assistant_id: Some("asst-env".to_string()),
            phone_number_id: Some("num-env".to_string()),
            base_url: base_url.to_string(),
        }
    }

    fn args() -> CallArgs {
        CallArgs {
            to: "+15551234567".to_string(),
            ..CallArgs::default()
        }
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn test_dial_prints_call_id() {
        let placer = FakePlacer::new(call_123);
        let mut out = Vec::new();

        dial(&placer, &settings(Some("sk-test"), "http://unused"), &args(), &mut out)
            .await
            .unwrap();

        assert!(output(out).contains("call_123"));
        assert_eq!(placer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dial_prints_error_without_failing() {
        let placer = FakePlacer::new(unreachable);
        let mut out = Vec::new();

        let settings = settings(Some("sk-test"), "http://unused");
        let result = dial(&placer, &settings, &args(), &mut out).await;

        assert!(result.is_ok());
        assert!(output(out).contains("Error: network unreachable"));
    }

    #[tokio::test]
    async fn test_place_call_discriminates_failures() {
        let request = build_request(&settings(Some("sk-test"), "http://unused"), &args()).unwrap();

        let ok = place_call(&FakePlacer::new(call_123), &request).await;
        assert_eq!(ok.unwrap().id, "call_123");

        let err = place_call(&FakePlacer::new(unreachable), &request)
            .await
            .unwrap_err();
        assert!(matches!(err, CallError::Client(ClientError::Network(_))));
    }

    #[test]
    fn test_initialize_client_without_api_key() {
        let err = initialize_client(&settings(None, "https://api.vapi.ai")).unwrap_err();
        assert!(matches!(err, CallError::Config(ConfigError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_run_demo_without_api_key_attempts_no_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/call");
            then.status(201).json_body(json!({ "id": "call_123" }));
        });
        let mut out = Vec::new();

        run_demo(&settings(None, &server.base_url()), &args(), &mut out)
            .await
            .unwrap();

        let printed = output(out);
        assert!(printed.contains("Error: VAPI_API_KEY not found in environment variables"));
        assert!(!printed.contains("initialized successfully"));
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_run_demo_places_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/call")
                .header("authorization", "Bearer sk-test")
                .json_body(json!({
                    "assistantId": "asst-env",
                    "phoneNumberId": "num-env",
                    "customer": { "number": "+15551234567" }
                }));
            then.status(201).json_body(json!({ "id": "call_123" }));
        });
        let mut out = Vec::new();

        run_demo(&settings(Some("sk-test"), &server.base_url()), &args(), &mut out)
            .await
            .unwrap();

        mock.assert();
        let printed = output(out);
        assert!(printed.contains("VAPI client initialized successfully"));
        assert!(printed.contains("Dialling, call id: call_123"));
    }

    #[tokio::test]
    async fn test_run_demo_reports_api_error() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(POST).path("/call");
            then.status(400).body("customer.number must be a valid phone number");
        });
        let mut out = Vec::new();

        run_demo(&settings(Some("sk-test"), &server.base_url()), &args(), &mut out)
            .await
            .unwrap();

        assert!(output(out).contains(
            "Error: API error (status 400): customer.number must be a valid phone number"
        ));
    }

    #[test]
    fn test_build_request_prefers_flags() {
        let args = CallArgs {
            assistant_id: Some("asst-flag".to_string()),
            number_id: Some("num-flag".to_string()),
            ..args()
        };

        let request = build_request(&settings(Some("sk-test"), "http://unused"), &args).unwrap();

        assert_eq!(request.assistant_id.as_deref(), Some("asst-flag"));
        assert_eq!(request.phone_number_id.as_deref(), Some("num-flag"));
        assert_eq!(request.customer.number, "+15551234567");
    }

    #[test]
    fn test_build_request_with_design() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"components": ["gateway", "queue"]}}"#).unwrap();

        let args = CallArgs {
            design: Some(file.path().to_path_buf()),
            ..args()
        };
        let request = build_request(&settings(Some("sk-test"), "http://unused"), &args).unwrap();

        assert!(request.assistant_id.is_none());
        let assistant = request.assistant.unwrap();
        assert!(assistant.model.messages[0].content.contains("\"gateway\""));
        assert_eq!(request.phone_number_id.as_deref(), Some("num-env"));
    }

    #[test]
    fn test_build_request_with_missing_design() {
        let args = CallArgs {
            design: Some(PathBuf::from("/nonexistent/design.json")),
            ..args()
        };

        let err = build_request(&settings(Some("sk-test"), "http://unused"), &args).unwrap_err();
        assert!(matches!(err, CallError::Design { .. }));
    }
}
