//! LLM API clients for various providers

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::Result;
use crate::errors::SocialPulseError;

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// `OpenAI` GPT models, or any OpenAI-compatible endpoint
    OpenAI,
    /// Ollama local models
    Ollama,
}

impl std::str::FromStr for LlmProvider {
    type Err = SocialPulseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "ollama" => Ok(Self::Ollama),
            other => Err(SocialPulseError::ConfigError(format!(
                "Unknown LLM provider: {other}"
            ))),
        }
    }
}

/// Chat message for conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Client for interacting with LLMs
#[derive(Clone)]
pub struct LlmClient {
    provider: LlmProvider,
    model: String,
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl LlmClient {
    /// Create a new LLM client
    ///
    /// # Errors
    /// - HTTP client creation errors
    pub fn new(
        provider: LlmProvider,
        model: String,
        endpoint: String,
        api_key: Option<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| SocialPulseError::HttpError(e.to_string()))?;

        Ok(Self {
            provider,
            model,
            endpoint,
            api_key,
            client,
        })
    }

    /// Create a client from application configuration
    ///
    /// # Errors
    /// - Unknown provider name in config
    /// - HTTP client creation errors
    pub fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let provider: LlmProvider = config.llm.llm_provider.parse()?;
        Self::new(
            provider,
            config.llm_model().to_string(),
            config.llm_endpoint().to_string(),
            config.llm_key().map(ToString::to_string),
        )
    }

    /// Chat completion with message history
    ///
    /// # Errors
    /// - LLM API call errors (network, authentication, rate limits)
    /// - Invalid response format
    /// - JSON parsing errors
    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        match self.provider {
            LlmProvider::OpenAI => self.chat_openai(messages, temperature, max_tokens).await,
            LlmProvider::Ollama => self.chat_ollama(messages, temperature, max_tokens).await,
        }
    }

    /// `OpenAI` chat completion
    async fn chat_openai(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct OpenAIRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage>,
            temperature: f32,
            max_tokens: usize,
        }

        #[derive(Deserialize)]
        struct OpenAIResponse {
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessage,
        }

        let url = format!("{}/chat/completions", self.endpoint);
        debug!("Calling OpenAI API: {}", url);

        let request = OpenAIRequest {
            model: &self.model,
            messages,
            temperature,
            max_tokens,
        };

        let mut req_builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        if let Some(key) = self.api_key.as_ref() {
            req_builder = req_builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = req_builder
            .json(&request)
            .send()
            .await
            .map_err(|e| SocialPulseError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SocialPulseError::LlmError(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        let result: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| SocialPulseError::LlmError(format!("Failed to parse response: {e}")))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| SocialPulseError::LlmError("No response from OpenAI".to_string()))
    }

    /// Ollama chat completion
    async fn chat_ollama(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
        _max_tokens: usize,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage>,
            stream: bool,
            options: OllamaOptions,
        }

        #[derive(Serialize)]
        struct OllamaOptions {
            temperature: f32,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            message: ChatMessage,
        }

        let url = format!("{}/api/chat", self.endpoint);
        debug!("Calling Ollama API: {}", url);

        let request = OllamaRequest {
            model: &self.model,
            messages,
            stream: false,
            options: OllamaOptions { temperature },
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SocialPulseError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SocialPulseError::LlmError(format!(
                "Ollama API error ({status}): {error_text}"
            )));
        }

        let result: OllamaResponse = response
            .json()
            .await
            .map_err(|e| SocialPulseError::LlmError(format!("Failed to parse response: {e}")))?;

        Ok(result.message.content)
    }
}
