//! User service - Wraps repository calls with context and notifications.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult};
use domain::{Locale, User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Every failure from the repository is returned wrapped in the matching
/// operation-scoped [`AppError`] variant, with the original error as its
/// source. Nothing is retried.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create (or overwrite) a user
    async fn create(&self, user: User) -> AppResult<User>;

    /// Get user by ID
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// Replace an existing user
    async fn update_user(&self, user: User) -> AppResult<User>;

    /// Delete an existing user
    async fn delete_user(&self, user: User) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    locale: Locale,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_locale(repo, Locale::default())
    }

    /// Create new user service instance that notifies in `locale`
    pub fn with_locale(repo: Arc<dyn UserRepository>, locale: Locale) -> Self {
        Self { repo, locale }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create(&self, user: User) -> AppResult<User> {
        self.repo
            .create(user.clone())
            .await
            .map_err(|e| AppError::create_failed(user.name.clone(), e))?;

        info!(user_id = user.id, "{}", self.locale.user_created(&user.name));
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        let user = self
            .repo
            .get_by_id(id)
            .await
            .map_err(|e| AppError::lookup_failed(id, e))?;

        info!(user_id = id, "{}", self.locale.user_found(&user.name));
        Ok(user)
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        let updated = self
            .repo
            .update_user(user.clone())
            .await
            .map_err(|e| AppError::update_failed(user, e))?;

        info!(user_id = updated.id, "{}", self.locale.user_updated(&updated.name));
        Ok(updated)
    }

    async fn delete_user(&self, user: User) -> AppResult<()> {
        let (id, name) = (user.id, user.name.clone());
        self.repo
            .delete_user(user)
            .await
            .map_err(|e| AppError::delete_failed(name.clone(), e))?;

        info!(user_id = id, "{}", self.locale.user_deleted(&name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use common::ErrorKind;

    use super::*;
    use crate::repository::MockUserRepository;

    fn manager(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(User::new(1, "Иван")))
            .times(1)
            .returning(|_| Ok(()));

        let result = manager(repo).create(User::new(1, "Иван")).await;
        assert_eq!(result, Ok(User::new(1, "Иван")));
    }

    #[tokio::test]
    async fn test_create_user_wraps_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|user| Err(AppError::not_found(user.id)));

        let err = manager(repo).create(User::new(4, "Иван")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CreateFailed);
        assert!(matches!(&err, AppError::CreateFailed { name, .. } if name == "Иван"));
        assert_eq!(err.cause(), Some(&AppError::NotFound { id: 4 }));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(User::new(id, "Иван")));

        let user = manager(repo).get_by_id(1).await.unwrap();
        assert_eq!(user, User::new(1, "Иван"));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Err(AppError::not_found(id)));

        let err = manager(repo).get_by_id(8).await.unwrap_err();
        assert!(matches!(err, AppError::LookupFailed { id: 8, .. }));
        assert!(err.is_not_found());
        assert_eq!(err.root_cause(), &AppError::NotFound { id: 8 });
    }

    #[tokio::test]
    async fn test_update_user_returns_repository_value() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .with(eq(User::new(1, "Антон")))
            .returning(Ok);

        let updated = manager(repo).update_user(User::new(1, "Антон")).await.unwrap();
        assert_eq!(updated, User::new(1, "Антон"));
    }

    #[tokio::test]
    async fn test_update_user_wraps_failure_with_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .returning(|user| Err(AppError::not_found(user.id)));

        let err = manager(repo).update_user(User::new(2, "Антон")).await.unwrap_err();
        assert_eq!(
            err,
            AppError::update_failed(User::new(2, "Антон"), AppError::not_found(2))
        );
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_user()
            .times(1)
            .returning(|_| Ok(()));

        let result = manager(repo).delete_user(User::new(1, "Антон")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_wraps_failure_with_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_user()
            .returning(|user| Err(AppError::not_found(user.id)));

        let err = manager(repo).delete_user(User::new(3, "Антон")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeleteFailed);
        assert_eq!(
            err.user_message(Locale::Ru),
            "Не удалось удалить пользователя Антон, Пользователь не найден"
        );
    }

    #[tokio::test]
    async fn test_failures_are_not_retried() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .times(1)
            .returning(|id| Err(AppError::not_found(id)));

        let service = UserManager::with_locale(Arc::new(repo), Locale::En);
        assert!(service.get_by_id(5).await.is_err());
    }
}
