use crate::config::ProvidersConfig;
use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

/// Sampling parameters sent with every provider call.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("response missing text content")]
    MissingContent,
}

/// One generation backend. Backends form an ordered strategy list tried
/// in sequence until one yields text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;
}

/// Primary endpoint: flat `{prompt, model, temperature, maxTokens}`
/// envelope with bearer auth. The text comes back in a `response` or
/// `content` field.
pub struct PromptApiProvider {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl PromptApiProvider {
    pub fn new(client: reqwest::Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            url: config.primary_url.clone(),
            api_key: config.primary_api_key.clone(),
            model: config.primary_model.clone(),
        }
    }
}

#[async_trait]
impl TextProvider for PromptApiProvider {
    fn name(&self) -> &'static str {
        "primary"
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "prompt": prompt,
                "model": self.model,
                "temperature": params.temperature,
                "maxTokens": params.max_output_tokens,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        let text = body
            .get("response")
            .and_then(Value::as_str)
            .or_else(|| body.get("content").and_then(Value::as_str))
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::MissingContent)?;

        Ok(text.to_string())
    }
}

/// Secondary endpoint: Gemini wire format, nested `contents/parts`
/// request and `candidates[0].content.parts[0].text` response. The API
/// key travels as a query parameter.
pub struct GeminiProvider {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(client: reqwest::Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            url: config.gemini_url.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }],
                }],
                "generationConfig": {
                    "temperature": params.temperature,
                    "topK": params.top_k,
                    "topP": params.top_p,
                    "maxOutputTokens": params.max_output_tokens,
                },
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::MissingContent)?;

        Ok(text.to_string())
    }
}
