//! Unified error handling for the store and service layers.
//!
//! The store produces a single root cause, [`AppError::NotFound`]. The service
//! layer never invents new root causes; it wraps whatever the store returned
//! into an operation-scoped variant that keeps the original error as its
//! `source`, so callers can inspect the full chain instead of parsing text.

use domain::{Locale, User, UserId};
use thiserror::Error;

/// Kind tag for each [`AppError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    CreateFailed,
    LookupFailed,
    UpdateFailed,
    DeleteFailed,
}

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Store errors
    #[error("User {id} not found")]
    NotFound { id: UserId },

    // Service errors (always wrap a store error)
    #[error("Failed to create user {name}")]
    CreateFailed { name: String, source: Box<AppError> },

    #[error("Failed to find user {id}")]
    LookupFailed { id: UserId, source: Box<AppError> },

    #[error("Unable to update user {user}")]
    UpdateFailed { user: User, source: Box<AppError> },

    #[error("Failed to delete user {name}")]
    DeleteFailed { name: String, source: Box<AppError> },
}

impl AppError {
    /// Get the kind tag of this error (not of its cause)
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::CreateFailed { .. } => ErrorKind::CreateFailed,
            AppError::LookupFailed { .. } => ErrorKind::LookupFailed,
            AppError::UpdateFailed { .. } => ErrorKind::UpdateFailed,
            AppError::DeleteFailed { .. } => ErrorKind::DeleteFailed,
        }
    }

    /// Get error code for logs and callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::CreateFailed { .. } => "CREATE_FAILED",
            AppError::LookupFailed { .. } => "LOOKUP_FAILED",
            AppError::UpdateFailed { .. } => "UPDATE_FAILED",
            AppError::DeleteFailed { .. } => "DELETE_FAILED",
        }
    }

    /// The wrapped error, if this is a service-level failure
    pub fn cause(&self) -> Option<&AppError> {
        match self {
            AppError::NotFound { .. } => None,
            AppError::CreateFailed { source, .. }
            | AppError::LookupFailed { source, .. }
            | AppError::UpdateFailed { source, .. }
            | AppError::DeleteFailed { source, .. } => Some(source),
        }
    }

    /// Innermost error of the chain
    pub fn root_cause(&self) -> &AppError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Check if the chain bottoms out in a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), AppError::NotFound { .. })
    }

    /// Localized message for this level of the chain only
    pub fn context_message(&self, locale: Locale) -> String {
        match self {
            AppError::NotFound { .. } => locale.user_not_found(),
            AppError::CreateFailed { name, .. } => locale.create_failed(name),
            AppError::LookupFailed { id, .. } => locale.lookup_failed(*id),
            AppError::UpdateFailed { user, .. } => locale.update_failed(user),
            AppError::DeleteFailed { name, .. } => locale.delete_failed(name),
        }
    }

    /// Get user-facing message: every level of the chain, outermost first
    pub fn user_message(&self, locale: Locale) -> String {
        let mut message = self.context_message(locale);
        let mut current = self;
        while let Some(cause) = current.cause() {
            message.push_str(", ");
            message.push_str(&cause.context_message(locale));
            current = cause;
        }
        message
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T> {
        self.ok_or(AppError::NotFound { id })
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(id: UserId) -> Self {
        AppError::NotFound { id }
    }

    pub fn create_failed(name: impl Into<String>, source: AppError) -> Self {
        AppError::CreateFailed {
            name: name.into(),
            source: Box::new(source),
        }
    }

    pub fn lookup_failed(id: UserId, source: AppError) -> Self {
        AppError::LookupFailed {
            id,
            source: Box::new(source),
        }
    }

    pub fn update_failed(user: User, source: AppError) -> Self {
        AppError::UpdateFailed {
            user,
            source: Box::new(source),
        }
    }

    pub fn delete_failed(name: impl Into<String>, source: AppError) -> Self {
        AppError::DeleteFailed {
            name: name.into(),
            source: Box::new(source),
        }
    }
}
