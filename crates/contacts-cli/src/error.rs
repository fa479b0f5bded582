// CLI error types

use thiserror::Error;

use contacts_application::errors::ApplicationError;
use contacts_config::ConfigError;
use contacts_persistence::PersistenceError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'contacts --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck the config file or CONTACTS_* environment variables.",
                    msg
                )
            }
            CliError::Storage(msg) => {
                format!("Storage error: {}\n\nCheck storage.data_file in your configuration.", msg)
            }
            CliError::Application(ApplicationError::Validation(messages)) => {
                let mut text = String::from("Validation failed:");
                for message in messages {
                    text.push_str("\n  - ");
                    text.push_str(message);
                }
                text
            }
            CliError::Application(e) => e.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<PersistenceError> for CliError {
    fn from(err: PersistenceError) -> Self {
        CliError::Storage(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
