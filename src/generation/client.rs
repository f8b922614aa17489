use crate::config::ProvidersConfig;
use crate::generation::provider::{
    GeminiProvider, GenerationParams, PromptApiProvider, TextProvider,
};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("all generation providers failed")]
    Unavailable,
}

/// Tries each configured backend in order until one returns text.
/// Attempts are sequential, never raced, with no backoff and no
/// cancellation path. Failures are logged and swallowed; only the
/// exhaustion of the whole list surfaces as `Unavailable`.
pub struct GenerationClient {
    providers: Vec<Box<dyn TextProvider>>,
    params: GenerationParams,
}

impl GenerationClient {
    pub fn new(providers: Vec<Box<dyn TextProvider>>) -> Self {
        Self {
            providers,
            params: GenerationParams::default(),
        }
    }

    /// Standard two-tier setup: primary endpoint, then Gemini.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let client = reqwest::Client::new();
        Self::new(vec![
            Box::new(PromptApiProvider::new(client.clone(), config)),
            Box::new(GeminiProvider::new(client, config)),
        ])
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        for provider in &self.providers {
            match provider.generate(prompt, &self.params).await {
                Ok(text) => return Ok(text),
                Err(err) => {
                    warn!("Generation provider '{}' failed: {}", provider.name(), err);
                }
            }
        }
        Err(GenerationError::Unavailable)
    }
}
