//! Configuration error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to merge configuration: {0}")]
    MergeError(#[from] config::ConfigError),

    #[error("Failed to serialize configuration as TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Environment variable {name} has invalid value {value:?}: {reason}")]
    EnvError {
        name: String,
        value: String,
        reason: String,
    },

    #[error("XDG directory error: {0}")]
    XdgError(String),
}
