//! Domain-level errors.
//!
//! These errors represent invalid domain values. They are independent of
//! storage concerns; store failures live in `common::AppError`.

use thiserror::Error;

/// Domain-specific errors for rejected values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested locale has no message catalog
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

impl DomainError {
    /// Create an unsupported locale error
    pub fn unsupported_locale(code: impl Into<String>) -> Self {
        DomainError::UnsupportedLocale(code.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
