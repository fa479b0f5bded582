//! Application layer error types
//!
//! These errors are what callers of the services branch on. Lookups that
//! find nothing are not errors: they come back as `None` or `false`.

use thiserror::Error;

use contacts_domain::errors::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// A required request argument was absent
    #[error("Request cannot be null: {0}")]
    NullRequest(String),

    /// A required identifier argument was absent
    #[error("Identifier cannot be null: {0}")]
    NullId(String),

    /// One or more field rules failed; every message is kept
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A uniqueness constraint was violated
    #[error("Name already exists: {0}")]
    DuplicateName(String),

    /// An update targeted a record that does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage collaborator failure
    #[error("Repository error: {0}")]
    Repository(String),
}

impl ApplicationError {
    /// Validation messages, or the error text for other kinds
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApplicationError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { messages } => ApplicationError::Validation(messages),
            DomainError::InvalidIdentifier { value } => {
                ApplicationError::Validation(vec![format!("Invalid identifier: {}", value)])
            }
            DomainError::InvalidGender { value } => {
                ApplicationError::Validation(vec![format!("Invalid gender: {}", value)])
            }
            DomainError::Storage { reason } => ApplicationError::Repository(reason),
        }
    }
}
