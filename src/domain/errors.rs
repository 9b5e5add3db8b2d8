// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A caller-supplied number outside its domain, e.g. a zero page size.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The search backend rejected a rendered query.
    #[error("search query rejected: {0}")]
    SearchSyntax(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Errors caused by request input rather than by the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Persistence(_))
    }
}
