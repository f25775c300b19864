//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Log filter used when neither `RUST_LOG` nor a verbose flag is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
}

impl ServiceConfig {
    /// Create a config for the named service
    pub fn named(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::named("service")
    }
}
