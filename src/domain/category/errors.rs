use thiserror::Error;

/// Errors raised by the catalog domain and its persistence collaborators.
///
/// `ValidationError` displays its message verbatim; consumers match on the
/// exact text, so no prefix is added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
    #[error("Operation cancelled")]
    Cancelled,
}
