//! Domain-level constants.
//!
//! These constants define defaults shared by configuration and the CLI.

// =============================================================================
// Locales
// =============================================================================

/// Russian locale code (default)
pub const LOCALE_RU: &str = "ru";

/// English locale code
pub const LOCALE_EN: &str = "en";

/// All supported locale codes
pub const SUPPORTED_LOCALES: &[&str] = &[LOCALE_RU, LOCALE_EN];

// =============================================================================
// Demo
// =============================================================================

/// Identifier used by the demonstration sequence when none is configured
pub const DEFAULT_DEMO_USER_ID: i64 = 1;
