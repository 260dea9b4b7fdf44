//! Command-line LLM backends
//!
//! Runs `claude -p <prompt>` or `ollama run <model> <prompt>` and returns
//! the trimmed standard output.

use crate::LlmError;
use attest_domain::traits::LlmProvider as LlmProviderTrait;
use attest_oracles::process;
use std::time::Duration;

/// Which CLI to drive
#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandKind {
    /// Anthropic's `claude` CLI in print mode
    Claude {
        /// Optional `--model` override
        model: Option<String>,
    },
    /// Local `ollama run`
    Ollama {
        /// Model to run
        model: String,
    },
}

/// LLM provider that shells out to a command-line tool
#[derive(Debug, Clone)]
pub struct CommandProvider {
    kind: CommandKind,
    timeout: Duration,
}

impl CommandProvider {
    /// Drive the `claude` CLI
    pub fn claude(model: Option<String>, timeout: Duration) -> Self {
        Self {
            kind: CommandKind::Claude { model },
            timeout,
        }
    }

    /// Drive the `ollama` CLI
    pub fn ollama(model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            kind: CommandKind::Ollama {
                model: model.into(),
            },
            timeout,
        }
    }

    /// Executable this provider runs
    pub fn program(&self) -> &'static str {
        match self.kind {
            CommandKind::Claude { .. } => "claude",
            CommandKind::Ollama { .. } => "ollama",
        }
    }

    /// Whether the executable is on PATH
    pub fn is_available(&self) -> bool {
        process::is_installed(self.program())
    }

    fn args(&self, prompt: &str) -> Vec<String> {
        match &self.kind {
            CommandKind::Claude { model } => {
                let mut args = vec!["-p".to_string(), prompt.to_string()];
                if let Some(model) = model {
                    args.push("--model".to_string());
                    args.push(model.clone());
                }
                args
            }
            CommandKind::Ollama { model } => {
                vec!["run".to_string(), model.clone(), prompt.to_string()]
            }
        }
    }
}

impl LlmProviderTrait for CommandProvider {
    type Error = LlmError;

    fn name(&self) -> &str {
        self.program()
    }

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let output = process::run(self.program(), self.args(prompt), self.timeout)?;
        let text = output.stdout.trim();
        if text.is_empty() {
            return Err(LlmError::InvalidResponse(format!(
                "{} returned no output",
                self.program()
            )));
        }
        Ok(text.to_string())
    }
}
