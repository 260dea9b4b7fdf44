//! Oracle backend configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the HTTP probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bound on the full round trip (seconds)
    pub timeout_secs: u64,

    /// Bound on connection setup (seconds)
    pub connect_timeout_secs: u64,

    /// Redirects followed before giving up
    pub max_redirects: usize,

    /// User-Agent header sent with every probe
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            connect_timeout_secs: 10,
            max_redirects: 10,
            user_agent: concat!("attest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    /// Full round-trip timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("http.timeout_secs must be greater than 0".to_string());
        }
        if self.connect_timeout_secs == 0 {
            return Err("http.connect_timeout_secs must be greater than 0".to_string());
        }
        if self.connect_timeout_secs > self.timeout_secs {
            return Err("http.connect_timeout_secs cannot exceed http.timeout_secs".to_string());
        }
        Ok(())
    }
}

/// Settings for the command-line oracles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Knowledge-graph executable
    pub knowledge_graph_command: String,

    /// Source-host executable
    pub source_host_command: String,

    /// Bound on each subprocess call (seconds)
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            knowledge_graph_command: "bip".to_string(),
            source_host_command: "gh".to_string(),
            timeout_secs: 30,
        }
    }
}

impl OracleConfig {
    /// Subprocess timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.knowledge_graph_command.trim().is_empty() {
            return Err("oracles.knowledge_graph_command must not be empty".to_string());
        }
        if self.source_host_command.trim().is_empty() {
            return Err("oracles.source_host_command must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("oracles.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(HttpConfig::default().validate().is_ok());
        assert!(OracleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_http_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.max_redirects, 10);
        assert!(config.user_agent.starts_with("attest/"));
    }

    #[test]
    fn test_connect_timeout_bounded() {
        let config = HttpConfig {
            connect_timeout_secs: 20,
            ..HttpConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = toml::from_str::<OracleConfig>("knowledge_graph_command = \"bip2\"").unwrap();
        assert_eq!(config.knowledge_graph_command, "bip2");
        assert_eq!(config.source_host_command, "gh");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_empty_command_rejected() {
        let config = OracleConfig {
            source_host_command: " ".into(),
            ..OracleConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
