//! Configuration module for loading and parsing TOML configuration files.

use crate::state::DEFAULT_JOURNAL_LIMIT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Contract configuration.
    #[serde(default)]
    pub contract: ContractConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
    /// Maximum number of recorded requests kept in the journal.
    #[serde(default = "default_journal_limit")]
    pub journal_limit: usize,
}

fn default_journal_limit() -> usize {
    DEFAULT_JOURNAL_LIMIT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4010,
            journal_limit: DEFAULT_JOURNAL_LIMIT,
        }
    }
}

/// Contract configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Path to the TOML contract served by the mock.
    pub path: PathBuf,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("contracts/orders.toml"),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Arguments
    /// * `content` - TOML content as string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `HOST` and `PORT` overrides from the environment.
    ///
    /// # Errors
    /// Returns error if `PORT` is not a valid port number.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("PORT must be a number: {port}")))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validates the configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "server host cannot be empty".to_string(),
            ));
        }
        if self.server.journal_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "journal limit must be positive".to_string(),
            ));
        }
        if self.contract.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "contract path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 3000

[contract]
path = "contracts/custom.toml"
"#;

        let config = Config::parse(toml_content).expect("should parse");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.contract.path, PathBuf::from("contracts/custom.toml"));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").expect("should parse");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4010);
        assert_eq!(config.contract.path, PathBuf::from("contracts/orders.toml"));
        assert_eq!(config.server.journal_limit, DEFAULT_JOURNAL_LIMIT);
    }

    #[test]
    fn test_parse_journal_limit() {
        let config = Config::parse("[server]\nhost = \"h\"\nport = 1\njournal_limit = 50\n")
            .expect("should parse");

        assert_eq!(config.server.journal_limit, 50);
    }

    #[test]
    fn test_validation_zero_journal_limit() {
        let result = Config::parse("[server]\nhost = \"h\"\nport = 1\njournal_limit = 0\n");

        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_empty_host() {
        let result = Config::parse("[server]\nhost = \"\"\nport = 1\n");

        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation_empty_contract_path() {
        let result = Config::parse("[contract]\npath = \"\"\n");

        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_parse_invalid_port() {
        let result = Config::parse("[server]\nhost = \"h\"\nport = 70000\n");

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
