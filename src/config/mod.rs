//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "PUBG_API_KEY";

/// Environment variable overriding the upstream base URL.
pub const BASE_URL_ENV: &str = "PUBG_BASE_URL";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Upstream statistics API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL including the platform shard
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer credential; checked per request, not at load time
    #[serde(default)]
    pub api_key: Option<String>,

    /// Optional request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.pubg.com/shards/steam".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// Serve the GraphiQL explorer on `GET /graphql`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_cors_origin() -> String {
    "*".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
            graphiql: default_graphiql(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            upstream: UpstreamConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `PUBG_API_KEY` / `PUBG_BASE_URL` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(BASE_URL_ENV).ok(),
        )
    }

    /// Apply explicit overrides; empty values are ignored.
    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.upstream.api_key = Some(key);
        }
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.upstream.base_url = url;
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Upstream base URL must not be empty".to_string(),
            ));
        }

        if url::Url::parse(&self.upstream.base_url).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Upstream base URL is not a valid URL: {}",
                self.upstream.base_url
            )));
        }

        if self.upstream.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.upstream.base_url, "https://api.pubg.com/shards/steam");
        assert!(config.upstream.api_key.is_none());
        assert!(config.upstream.timeout().is_none());
        assert_eq!(config.server.port, 4000);
        assert!(config.server.graphiql);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_timeout() {
        let mut config = AppConfig::default();
        config.upstream.timeout_seconds = Some(0);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_base_url() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.upstream.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(
            Some("secret".to_string()),
            Some("http://localhost:9999".to_string()),
        );
        assert_eq!(config.upstream.api_key.as_deref(), Some("secret"));
        assert_eq!(config.upstream.base_url, "http://localhost:9999");

        let config = AppConfig::default().with_overrides(Some(String::new()), None);
        assert!(config.upstream.api_key.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[upstream]
api_key = "from-file"
timeout_seconds = 15

[server]
port = 8088
graphiql = false
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.upstream.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.upstream.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.upstream.base_url, "https://api.pubg.com/shards/steam");
        assert_eq!(config.server.port, 8088);
        assert!(!config.server.graphiql);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.upstream.base_url, parsed.upstream.base_url);
    }
}
