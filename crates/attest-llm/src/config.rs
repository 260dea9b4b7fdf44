//! LLM backend configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which text-completion backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LlmBackend {
    /// `claude` CLI if installed, else `ollama` CLI, else none
    #[default]
    Auto,
    /// `claude -p`
    Claude,
    /// `ollama run`
    Ollama,
    /// Ollama HTTP API
    OllamaHttp,
    /// Never consult a model
    None,
}

impl LlmBackend {
    /// Parse a backend name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(LlmBackend::Auto),
            "claude" => Some(LlmBackend::Claude),
            "ollama" => Some(LlmBackend::Ollama),
            "ollama-http" => Some(LlmBackend::OllamaHttp),
            "none" => Some(LlmBackend::None),
            _ => None,
        }
    }
}

/// Configuration for the text-completion oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Backend selection
    pub provider: LlmBackend,

    /// Model for the Ollama backends
    pub model: String,

    /// Model passed to `claude --model`; the CLI default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claude_model: Option<String>,

    /// Ollama HTTP endpoint
    pub endpoint: String,

    /// Bound on a single completion (seconds)
    pub timeout_secs: u64,

    /// Attempts for the HTTP backend
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmBackend::Auto,
            model: "llama3.2".to_string(),
            claude_model: None,
            endpoint: crate::ollama::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
            max_retries: 2,
        }
    }
}

impl LlmConfig {
    /// Completion timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("llm.timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("llm.max_retries must be greater than 0".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("llm.model must not be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!("llm.endpoint is not an http(s) URL: {}", self.endpoint));
        }
        Ok(())
    }
}
