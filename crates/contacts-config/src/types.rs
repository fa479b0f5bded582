//! Core configuration types and data structures

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Storage configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Which storage collaborator backs the services
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on exit
    #[default]
    Memory,
    /// Single JSON document on disk
    Json,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::Json => f.write_str("json"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage backend
    pub backend: StorageBackend,
    /// Store document, required by the json backend
    pub data_file: Option<PathBuf>,
    /// Country seed list loaded at startup
    pub seed_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&self) -> Result<AppConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
}
