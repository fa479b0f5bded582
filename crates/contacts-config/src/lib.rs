//! Contacts Configuration Management
//!
//! Loads [`AppConfig`] from built-in defaults, an optional TOML file and
//! `CONTACTS_*` environment variables, validates it, and can write it back.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AppConfig, ConfigManager as ConfigManagerTrait, LoggingConfig, StorageBackend, StorageConfig,
};
