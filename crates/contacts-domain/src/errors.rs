//! Domain errors for the contacts manager

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// One or more declarative field rules failed
    #[error("Validation failed: {}", messages.join("; "))]
    Validation { messages: Vec<String> },

    #[error("Invalid identifier: {value}")]
    InvalidIdentifier { value: String },

    #[error("Invalid gender: {value}")]
    InvalidGender { value: String },

    #[error("Storage failure: {reason}")]
    Storage { reason: String },
}

impl DomainError {
    /// Single-message validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            messages: vec![message.into()],
        }
    }

    /// Validation messages carried by this error, empty for other kinds
    pub fn messages(&self) -> &[String] {
        match self {
            DomainError::Validation { messages } => messages,
            _ => &[],
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
