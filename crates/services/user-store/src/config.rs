//! User store configuration.

use std::env;

use common::ServiceConfig;
use domain::{Locale, UserId, DEFAULT_DEMO_USER_ID, SUPPORTED_LOCALES};
use tracing::warn;

/// User store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Base service settings
    pub service: ServiceConfig,
    /// Language for notifications and error messages
    pub locale: Locale,
    /// Identifier the demo sequence operates on
    pub demo_user_id: UserId,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let locale = match lookup("USER_STORE_LOCALE") {
            Some(raw) => raw.parse::<Locale>().unwrap_or_else(|e| {
                warn!("{}, expected one of {:?}", e, SUPPORTED_LOCALES);
                defaults.locale
            }),
            None => defaults.locale,
        };

        let demo_user_id = match lookup("USER_STORE_DEMO_USER_ID") {
            Some(raw) => raw.trim().parse::<UserId>().unwrap_or_else(|_| {
                warn!("Invalid USER_STORE_DEMO_USER_ID {:?}, using {}", raw, defaults.demo_user_id);
                defaults.demo_user_id
            }),
            None => defaults.demo_user_id,
        };

        let service = match lookup("USER_STORE_SERVICE_NAME") {
            Some(name) => ServiceConfig::named(name),
            None => defaults.service,
        };

        Self {
            service,
            locale,
            demo_user_id,
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::named("user-store"),
            locale: Locale::default(),
            demo_user_id: DEFAULT_DEMO_USER_ID,
        }
    }
}
