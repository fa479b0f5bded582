//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, ConfigManager as ConfigManagerTrait, StorageBackend, LOG_LEVELS},
};

/// Default environment variable prefix, e.g. `CONTACTS_STORAGE__BACKEND=json`
pub const DEFAULT_ENV_PREFIX: &str = "CONTACTS";

/// Configuration manager
///
/// Layers, lowest to highest precedence: built-in defaults, the TOML file,
/// then `CONTACTS_*` environment variables with `__` between nested keys.
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Whether a missing file is an error
    required: bool,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager reading the per-user config file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            required: false,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Create with an explicit config path, which must exist when loading
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("contacts")
            .join("config.toml")
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&self) -> Result<AppConfig> {
        if self.required && !self.config_path.exists() {
            return Err(ConfigError::NotFound(
                self.config_path.display().to_string(),
            ));
        }

        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        self.validate_config(&app_config)?;

        debug!(
            path = %self.config_path.display(),
            backend = %app_config.storage.backend,
            "configuration loaded"
        );
        Ok(app_config)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        self.validate_config(config)?;
        let toml = toml::to_string_pretty(config)?;
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if config.storage.backend == StorageBackend::Json && config.storage.data_file.is_none() {
            return Err(ConfigError::Validation(
                "The json storage backend requires storage.data_file".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
