//! Gemini LLM Gateway implementation

use super::error::GeminiError;
use super::protocol::{GenerateContentRequest, GenerateContentResponse};
use crate::config::FileLlmConfig;
use async_trait::async_trait;
use scripture_application::{GatewayError, LlmGateway};
use std::time::Duration;
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// LLM Gateway implementation for the Gemini `generateContent` API
///
/// One client is built at startup and shared by every request. Each
/// `generate` call is a single attempt; there are no retries.
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GeminiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Build from the `[llm]` section, reading the key from `api_key_env`
    pub fn from_config(config: &FileLlmConfig) -> Result<Self, GeminiError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(config.api_key_env.clone()))?;

        let gateway = Self::new(
            config.base_url.as_str(),
            config.model.as_str(),
            api_key,
            config.timeout_seconds.map(Duration::from_secs),
        )?;
        info!(model = %gateway.model, "GeminiGateway initialized");
        Ok(gateway)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn call(&self, prompt: &str) -> Result<String, GeminiError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini request failed");
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.text().ok_or(GeminiError::NoCandidates)
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        Ok(self.call(prompt).await?)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
