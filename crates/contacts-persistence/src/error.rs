//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// IO failure reading or writing a store file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored or seeded record violates an entity invariant
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Seed file not found
    #[error("File not found: {path}")]
    NotFound { path: String },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convert persistence errors to domain errors
impl From<PersistenceError> for contacts_domain::errors::DomainError {
    fn from(err: PersistenceError) -> Self {
        contacts_domain::errors::DomainError::Storage {
            reason: err.to_string(),
        }
    }
}
