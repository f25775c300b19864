//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified, structured error handling for the store and service layers
//! - Base configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ErrorKind, OptionExt};
