//! HTTP client for running hosted Langflow flows

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::errors::SocialPulseError;

/// Component-id to configuration-override mapping applied at run time
pub type Tweaks = Map<String, Value>;

/// Parse a tweaks JSON string into an override mapping
///
/// Runs before any network call: malformed JSON is a fatal input error.
///
/// # Errors
/// - Invalid JSON syntax
/// - Valid JSON that is not an object
pub fn parse_tweaks(raw: &str) -> Result<Tweaks> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| SocialPulseError::InvalidInput(format!("Invalid tweaks JSON string: {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SocialPulseError::InvalidInput(
            "Tweaks must be a JSON object mapping component ids to overrides".to_string(),
        )),
    }
}

/// Request body for a flow run
#[derive(Debug, Serialize)]
struct FlowPayload<'a> {
    input_value: &'a str,
    output_type: &'a str,
    input_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tweaks: Option<&'a Tweaks>,
}

/// Client for the hosted flow execution endpoint
#[derive(Clone)]
pub struct FlowClient {
    base_url: String,
    flow_group_id: String,
    client: Client,
}

impl FlowClient {
    /// Create a new flow client
    ///
    /// # Errors
    /// - HTTP client creation errors
    pub fn new(base_url: String, flow_group_id: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| SocialPulseError::HttpError(e.to_string()))?;

        Ok(Self {
            base_url,
            flow_group_id,
            client,
        })
    }

    /// Create a client from application configuration
    ///
    /// # Errors
    /// - HTTP client creation errors
    pub fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        Self::new(
            config.flow_base_url().to_string(),
            config.flow_group_id().to_string(),
        )
    }

    /// Run a flow with a given message and optional tweaks
    ///
    /// Sends one POST and returns the parsed JSON response verbatim,
    /// including provider error payloads. No interpretation, no validation,
    /// no retry. The bearer header is attached only when a token is given.
    ///
    /// # Errors
    /// - Network or TLS failures
    /// - Responses that are not valid JSON
    pub async fn run(
        &self,
        message: &str,
        endpoint: &str,
        output_type: &str,
        input_type: &str,
        tweaks: Option<&Tweaks>,
        application_token: Option<&str>,
    ) -> Result<Value> {
        let api_url = run_url(&self.base_url, &self.flow_group_id, endpoint);
        debug!("Running flow at {}", api_url);

        let payload = FlowPayload {
            input_value: message,
            output_type,
            input_type,
            tweaks,
        };

        let mut req_builder = self.client.post(&api_url).json(&payload);
        if let Some(token) = application_token {
            req_builder = req_builder.header("Authorization", format!("Bearer {token}"));
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| SocialPulseError::FlowError(format!("Flow request failed: {e}")))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| SocialPulseError::FlowError(format!("Invalid flow response: {e}")))?;

        Ok(body)
    }
}

/// Build the run URL for a flow endpoint
#[must_use]
pub(crate) fn run_url(base_url: &str, flow_group_id: &str, endpoint: &str) -> String {
    format!("{base_url}/lf/{flow_group_id}/api/v1/run/{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_url() {
        assert_eq!(
            run_url(
                "https://api.langflow.astra.datastax.com",
                "0d9c18a0",
                "16d3c55f"
            ),
            "https://api.langflow.astra.datastax.com/lf/0d9c18a0/api/v1/run/16d3c55f"
        );
    }

    #[test]
    fn test_parse_tweaks_valid() {
        let tweaks = parse_tweaks(r#"{"OpenAIModel-8xUKJ": {"model_name": "gpt-4"}}"#).unwrap();
        assert!(tweaks.contains_key("OpenAIModel-8xUKJ"));
    }

    #[test]
    fn test_parse_tweaks_empty_object() {
        assert!(parse_tweaks("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tweaks_invalid_json() {
        assert!(parse_tweaks("{bad").is_err());
    }

    #[test]
    fn test_parse_tweaks_non_object() {
        assert!(parse_tweaks("[1, 2]").is_err());
        assert!(parse_tweaks("\"tweaks\"").is_err());
    }

    #[test]
    fn test_payload_omits_absent_tweaks() {
        let payload = FlowPayload {
            input_value: "hello",
            output_type: "chat",
            input_type: "chat",
            tweaks: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("tweaks").is_none());
        assert_eq!(json["input_value"], "hello");
    }
}
