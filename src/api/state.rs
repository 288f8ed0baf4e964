//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserRecord, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::UserService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, user: User) -> Result<UserRecord, DomainError>;
    async fn list(&self) -> Result<Vec<UserRecord>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<UserRecord>, DomainError>;
    async fn replace(&self, id: &str, user: User) -> Result<UserRecord, DomainError>;
    async fn delete(&self, id: &str) -> Result<UserRecord, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, user: User) -> Result<UserRecord, DomainError> {
        UserService::create(self, user).await
    }

    async fn list(&self) -> Result<Vec<UserRecord>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: &str) -> Result<Option<UserRecord>, DomainError> {
        UserService::get(self, id).await
    }

    async fn replace(&self, id: &str, user: User) -> Result<UserRecord, DomainError> {
        UserService::replace(self, id, user).await
    }

    async fn delete(&self, id: &str) -> Result<UserRecord, DomainError> {
        UserService::delete(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}
