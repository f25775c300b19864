//! User repository with an in-memory, map-backed implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use common::{AppResult, OptionExt};
use domain::{User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// `create` is a blind upsert. `update_user` and `delete_user` require the
/// record to exist and fail with [`common::AppError::NotFound`] otherwise. All records
/// are keyed by the `id` embedded in the argument.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite the record at `user.id`
    async fn create(&self, user: User) -> AppResult<()>;

    /// Find user by ID
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// Replace an existing record with `user`
    async fn update_user(&self, user: User) -> AppResult<User>;

    /// Remove the record at `user.id` (other fields are ignored)
    async fn delete_user(&self, user: User) -> AppResult<()>;
}

/// In-memory implementation of UserRepository.
///
/// A single lock guards the map; each operation holds it across its
/// existence check and mutation.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    /// Create new empty repository instance
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: User) -> AppResult<()> {
        debug!(user_id = user.id, "Storing user");
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        debug!(user_id = id, "Looking up user");
        self.users.read().await.get(&id).cloned().ok_or_not_found(id)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        debug!(user_id = user.id, "Updating user");
        let mut users = self.users.write().await;
        let slot = users.get_mut(&user.id).ok_or_not_found(user.id)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete_user(&self, user: User) -> AppResult<()> {
        debug!(user_id = user.id, "Deleting user");
        self.users
            .write()
            .await
            .remove(&user.id)
            .map(|_| ())
            .ok_or_not_found(user.id)
    }
}

#[cfg(test)]
mod tests {
    use common::AppError;

    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryUserStore::new();
        store.create(User::new(1, "Иван")).await.unwrap();

        let user = store.get_by_id(1).await.unwrap();
        assert_eq!(user, User::new(1, "Иван"));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemoryUserStore::new();
        let result = store.get_by_id(42).await;

        assert_eq!(result, Err(AppError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn test_create_overwrites() {
        let store = InMemoryUserStore::new();
        store.create(User::new(1, "Иван")).await.unwrap();
        store.create(User::new(1, "Пётр")).await.unwrap();

        assert_eq!(store.get_by_id(1).await.unwrap().name, "Пётр");
    }

    #[tokio::test]
    async fn test_update_requires_existing_record() {
        let store = InMemoryUserStore::new();
        let result = store.update_user(User::new(1, "Антон")).await;

        assert_eq!(result, Err(AppError::NotFound { id: 1 }));
        assert!(store.get_by_id(1).await.is_err());
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = InMemoryUserStore::new();
        store.create(User::new(1, "Иван")).await.unwrap();

        let updated = store.update_user(User::new(1, "Антон")).await.unwrap();
        assert_eq!(updated, User::new(1, "Антон"));
        assert_eq!(store.get_by_id(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete_ignores_name() {
        let store = InMemoryUserStore::new();
        store.create(User::new(1, "Иван")).await.unwrap();

        store.delete_user(User::new(1, "someone else")).await.unwrap();
        assert_eq!(store.get_by_id(1).await, Err(AppError::NotFound { id: 1 }));
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let store = InMemoryUserStore::new();
        store.create(User::new(2, "Иван")).await.unwrap();

        let result = store.delete_user(User::new(1, "Иван")).await;
        assert_eq!(result, Err(AppError::NotFound { id: 1 }));
        assert!(store.get_by_id(2).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_after_delete_fails() {
        let store = InMemoryUserStore::new();
        store.create(User::new(1, "Иван")).await.unwrap();
        store.delete_user(User::new(1, "Иван")).await.unwrap();

        let result = store.update_user(User::new(1, "Антон")).await;
        assert!(matches!(result, Err(AppError::NotFound { id: 1 })));
    }
}
