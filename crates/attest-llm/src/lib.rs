//! Attest LLM Provider Layer
//!
//! Text-completion backends for the claim classifier's oracle fallback.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `attest-domain`. The classifier only ever sees that trait, so backends can
//! be swapped without touching verification logic.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Ollama HTTP API
//! - `CommandProvider`: `claude` or `ollama` command-line tools
//! - `AnyProvider`: whichever of the above [`select_provider`] picked
//!
//! # Examples
//!
//! ```
//! use attest_llm::MockProvider;
//! use attest_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"needs_citation": false}"#);
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, r#"{"needs_citation": false}"#);
//! ```

#![warn(missing_docs)]

pub mod command;
mod config;
pub mod ollama;
mod provider;

use attest_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use command::CommandProvider;
pub use config::{LlmBackend, LlmConfig};
pub use ollama::OllamaProvider;
pub use provider::{select_provider, AnyProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network, API or subprocess communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend not installed or not reachable
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Call exceeded its time bound
    #[error("LLM call timed out")]
    Timeout,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<attest_oracles::ProcessError> for LlmError {
    fn from(err: attest_oracles::ProcessError) -> Self {
        use attest_oracles::ProcessError;
        match err {
            ProcessError::NotFound { .. } => LlmError::Unavailable(err.to_string()),
            ProcessError::Timeout { .. } => LlmError::Timeout,
            _ => LlmError::Communication(err.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without any network or subprocess
/// calls, and records every prompt it receives.
///
/// # Examples
///
/// ```
/// use attest_llm::MockProvider;
/// use attest_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Responses keyed by prompt
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_error("prompt2");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert!(provider.generate("prompt2").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Scripted,
    responses: Arc<Mutex<HashMap<String, Scripted>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Scripted::Reply(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider whose every call fails
    pub fn failing() -> Self {
        Self {
            default_response: Scripted::Fail,
            ..Self::new("")
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Scripted::Reply(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Scripted::Fail);
    }

    /// Number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn name(&self) -> &str {
        "mock"
    }

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        let scripted = lock(&self.responses)
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone());
        match scripted {
            Scripted::Reply(response) => Ok(response),
            Scripted::Fail => Err(LlmError::Other("Mock error".to_string())),
        }
    }
}
