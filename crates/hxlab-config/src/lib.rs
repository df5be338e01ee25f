//! Configuration management for hxlab
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Platform variables (`APP_ENV=production`, `PORT`)
//! 3. Environment variables (`HXLAB__SECTION__KEY`)
//! 4. hxlab.local.toml (gitignored, local overrides)
//! 5. hxlab.toml (git-tracked, project config)
//! 6. ~/.config/hxlab/config.toml (user defaults)
//! 7. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Origin the demo is deployed behind when running in public mode.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://simple-htmx-go-tutorial-production.up.railway.app";

/// Main hxlab configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HxlabConfig {
    pub server: ServerConfig,
    pub addressing: AddressingConfig,
    pub exercises: ExercisesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// How fragments address the endpoints they embed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressingMode {
    /// Paths are embedded as-is, relative to whatever origin served the page.
    #[default]
    Local,
    /// Paths are prefixed with the public base origin.
    Public,
}

impl std::fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressingMode::Local => f.write_str("local"),
            AddressingMode::Public => f.write_str("public"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressingConfig {
    pub mode: AddressingMode,
    pub public_base_url: String,
}

impl Default for AddressingConfig {
    fn default() -> Self {
        Self {
            mode: AddressingMode::Local,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExercisesConfig {
    /// Artificial latency of the form submission exercise.
    pub submit_delay_ms: u64,
    /// Polling interval the index page asks the client to use for the clock.
    pub poll_interval_secs: u64,
}

impl Default for ExercisesConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            poll_interval_secs: 2,
        }
    }
}

impl HxlabConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Configuration matching the public deployment.
    pub fn production() -> Self {
        Self {
            addressing: AddressingConfig {
                mode: AddressingMode::Public,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Checks invariants that the server relies on at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.exercises.poll_interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "exercises.poll_interval_secs must be non-zero".to_string(),
            ));
        }
        validate_base_url(&self.addressing.public_base_url)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// A base origin must be `http(s)://host[:port]` with no trailing slash, so
/// that appending an absolute path yields a well-formed URL.
pub fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "addressing.public_base_url must start with http:// or https://, got {url:?}"
            ))
        })?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "addressing.public_base_url has no host: {url:?}"
        )));
    }
    if rest.contains('/') {
        return Err(ConfigError::ValidationError(format!(
            "addressing.public_base_url must be an origin without a path or trailing slash: {url:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HxlabConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.addressing.mode, AddressingMode::Local);
        assert_eq!(config.addressing.public_base_url, DEFAULT_PUBLIC_BASE_URL);
        assert_eq!(config.exercises.submit_delay_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_config() {
        let config = HxlabConfig::production();
        assert_eq!(config.addressing.mode, AddressingMode::Public);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_rejects_trailing_slash() {
        let mut config = HxlabConfig::default();
        config.addressing.public_base_url = "https://example.com/".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_missing_scheme_and_host() {
        for bad in ["example.com", "ftp://example.com", "https://", "http:///x"] {
            let mut config = HxlabConfig::default();
            config.addressing.public_base_url = bad.to_string();
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_accepts_origin_with_port() {
        let mut config = HxlabConfig::default();
        config.addressing.public_base_url = "http://localhost:3000".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = HxlabConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_keeps_mode() {
        let toml_str = HxlabConfig::production().to_toml().unwrap();
        assert!(toml_str.contains("mode = \"public\""));
        let parsed: HxlabConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, HxlabConfig::production());
    }
}
