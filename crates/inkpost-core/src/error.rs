//! Domain-level error types.

use thiserror::Error;

/// Domain errors - the outcomes a caller of the service layer can observe.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Post not found: id {id}")]
    NotFound { id: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}

/// Mail delivery errors.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Message(String),

    #[error("Mail transport failed: {0}")]
    Transport(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            // Callers that can produce a meaningful NotFound map it themselves;
            // a bare repo NotFound reaching this point is an internal fault.
            RepoError::NotFound => DomainError::Internal("entity not found".to_string()),
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}

impl From<MailError> for DomainError {
    fn from(err: MailError) -> Self {
        DomainError::Internal(err.to_string())
    }
}
