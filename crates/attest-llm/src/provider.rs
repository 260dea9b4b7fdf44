//! Runtime backend selection

use crate::{CommandProvider, LlmBackend, LlmConfig, LlmError, MockProvider, OllamaProvider};
use attest_domain::traits::LlmProvider as LlmProviderTrait;
use tracing::{info, warn};

/// Any configured text-completion backend
pub enum AnyProvider {
    /// `claude` or `ollama` CLI
    Command(CommandProvider),
    /// Ollama HTTP API
    Ollama(OllamaProvider),
    /// Scripted responses
    Mock(MockProvider),
}

impl LlmProviderTrait for AnyProvider {
    type Error = LlmError;

    fn name(&self) -> &str {
        match self {
            AnyProvider::Command(p) => p.name(),
            AnyProvider::Ollama(p) => LlmProviderTrait::name(p),
            AnyProvider::Mock(p) => p.name(),
        }
    }

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            AnyProvider::Command(p) => p.generate(prompt),
            AnyProvider::Ollama(p) => LlmProviderTrait::generate(p, prompt),
            AnyProvider::Mock(p) => p.generate(prompt),
        }
    }
}

/// Pick the backend described by `config`
///
/// `auto` prefers the `claude` CLI, then the `ollama` CLI. Returns `None`
/// when nothing usable is configured or installed; callers then keep the
/// heuristic classification.
pub fn select_provider(config: &LlmConfig) -> Option<AnyProvider> {
    let claude = || CommandProvider::claude(config.claude_model.clone(), config.timeout());
    let ollama = || CommandProvider::ollama(config.model.clone(), config.timeout());

    let selected = match config.provider {
        LlmBackend::None => None,
        LlmBackend::Auto => [claude(), ollama()]
            .into_iter()
            .find(CommandProvider::is_available)
            .map(AnyProvider::Command),
        LlmBackend::Claude => Some(claude())
            .filter(CommandProvider::is_available)
            .map(AnyProvider::Command),
        LlmBackend::Ollama => Some(ollama())
            .filter(CommandProvider::is_available)
            .map(AnyProvider::Command),
        LlmBackend::OllamaHttp => match OllamaProvider::from_config(config) {
            Ok(provider) => Some(AnyProvider::Ollama(provider)),
            Err(e) => {
                warn!(error = %e, "Ollama HTTP provider unavailable");
                None
            }
        },
    };

    match &selected {
        Some(provider) => info!(provider = provider.name(), "LLM fallback enabled"),
        None => info!(requested = ?config.provider, "no LLM provider available"),
    }
    selected
}
