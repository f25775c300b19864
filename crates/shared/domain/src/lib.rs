//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user record and the localized message catalog live here so that both
//! the error crate and the store service render text the same way.

pub mod constants;
pub mod error;
pub mod locale;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use locale::Locale;
pub use user::{User, UserId};
