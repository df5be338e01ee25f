//! Configuration loader with multi-source merging

use crate::{AddressingMode, ConfigError, HxlabConfig, Paths};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// Selects public addressing when set to `production`.
const APP_ENV_VAR: &str = "APP_ENV";
/// Listener port set by hosting platforms.
const PORT_VAR: &str = "PORT";

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    env_source: Option<HashMap<String, String>>,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "HXLAB".to_string(),
            env_source: None,
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "HXLAB")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read environment variables from `vars` instead of the process environment.
    pub fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Skip ~/.config/hxlab/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<HxlabConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = HxlabConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/hxlab/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (hxlab.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (hxlab.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (HXLAB__SECTION__KEY). Double underscores
        // keep keys such as `public_base_url` intact.
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(self.env_source.clone()),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut hxlab_config: HxlabConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // 6. Platform variables
        self.apply_platform_env(&mut hxlab_config)?;

        Ok(hxlab_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> HxlabConfig {
        self.load().unwrap_or_default()
    }

    fn var(&self, name: &str) -> Option<String> {
        match &self.env_source {
            Some(vars) => vars.get(name).cloned(),
            None => env::var(name).ok(),
        }
    }

    fn apply_platform_env(&self, config: &mut HxlabConfig) -> Result<(), ConfigError> {
        if self.var(APP_ENV_VAR).as_deref() == Some("production") {
            config.addressing.mode = AddressingMode::Public;
        }

        if let Some(port) = self.var(PORT_VAR).filter(|p| !p.is_empty()) {
            config.server.port = port.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::EnvError {
                    name: PORT_VAR.to_string(),
                    value: port.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
