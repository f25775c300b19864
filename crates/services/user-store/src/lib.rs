//! User Store Library
//!
//! An in-process user record store: a [`repository::UserRepository`]
//! capability with an in-memory implementation, and a
//! [`service::UserService`] that wraps it with context-carrying errors and
//! localized status notifications.

pub mod config;
pub mod demo;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::demo::DemoOutcome;
use crate::repository::InMemoryUserStore;
use crate::service::UserManager;

/// Build a fresh in-memory store and service, then run the demo sequence.
pub async fn run_demo(config: &UserServiceConfig) -> DemoOutcome {
    // Create repository and service
    let user_repo = Arc::new(InMemoryUserStore::new());
    let user_service = UserManager::with_locale(user_repo, config.locale);

    info!(service = %config.service.service_name, "User store ready");
    demo::run(&user_service, config.locale, config.demo_user_id).await
}
