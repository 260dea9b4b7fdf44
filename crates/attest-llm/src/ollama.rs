//! Ollama Provider Implementation
//!
//! Talks to Ollama's `/api/generate` endpoint.
//!
//! # Features
//!
//! - Async HTTP communication with the Ollama API
//! - Configurable endpoint, model and timeout
//! - Retry logic with exponential backoff
//! - Blocking `LlmProvider` wrapper for the synchronous pipeline, driven
//!   by the runtime shared with the subprocess oracles
//!
//! # Examples
//!
//! ```no_run
//! use attest_llm::OllamaProvider;
//! use attest_domain::traits::LlmProvider;
//!
//! let provider = OllamaProvider::default_endpoint("llama3.2").unwrap();
//! let answer = LlmProvider::generate(&provider, "Reply with OK").unwrap();
//! ```

use crate::{LlmConfig, LlmError};
use attest_domain::traits::LlmProvider as LlmProviderTrait;
use attest_oracles::process;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Ollama API provider
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response from the generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaProvider {
    /// Create a provider for `model` served at `endpoint`
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a provider on `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Create a provider from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        Ok(Self::with_timeout(&config.endpoint, &config.model, config.timeout())?
            .with_max_retries(config.max_retries))
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Generate text asynchronously
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running
    /// - The model is not pulled
    /// - The response body is not the expected JSON
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.endpoint);
        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) if response.status().is_success() => {
                    return response
                        .json::<OllamaGenerateResponse>()
                        .await
                        .map(|r| r.response.trim().to_string())
                        .map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        });
                }
                Ok(response) if response.status() == reqwest::StatusCode::NOT_FOUND => {
                    return Err(LlmError::ModelNotAvailable(self.model.clone()));
                }
                Ok(response) => {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    last_error = Some(LlmError::Communication(format!(
                        "HTTP {}: {}",
                        status, error_text
                    )));
                }
                Err(e) if e.is_timeout() => last_error = Some(LlmError::Timeout),
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!(attempts, ?delay, "Ollama request failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for OllamaProvider {
    type Error = LlmError;

    fn name(&self) -> &str {
        "ollama-http"
    }

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper on the process-wide runtime
        process::runtime()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
            .block_on(OllamaProvider::generate(self, prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434/", "llama3.2").unwrap();
        assert_eq!(provider.endpoint, "http://localhost:11434");
        assert_eq!(provider.model, "llama3.2");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_ollama_provider_from_config() {
        let config = LlmConfig {
            model: "mistral".into(),
            max_retries: 4,
            ..LlmConfig::default()
        };
        let provider = OllamaProvider::from_config(&config).unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "mistral");
        assert_eq!(provider.max_retries, 4);
    }

    #[test]
    fn test_retries_never_zero() {
        let provider = OllamaProvider::default_endpoint("m").unwrap().with_max_retries(0);
        assert_eq!(provider.max_retries, 1);
    }

    #[tokio::test]
    async fn test_ollama_error_handling() {
        // Port 1 is never an Ollama server
        let provider = OllamaProvider::new("http://127.0.0.1:1", "llama3.2")
            .unwrap()
            .with_max_retries(1);

        match provider.generate("test").await {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_blocking_wrapper_reports_errors() {
        let provider = OllamaProvider::new("http://127.0.0.1:1", "llama3.2")
            .unwrap()
            .with_max_retries(1);
        for _ in 0..2 {
            match LlmProviderTrait::generate(&provider, "test") {
                Err(LlmError::Communication(_)) => {}
                other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
            }
        }
    }
}
