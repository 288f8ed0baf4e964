//! User repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::{UserId, UserRecord};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations must make each call atomic with respect to the others:
/// no caller may observe a record halfway through an update.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by its ID
    async fn get(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError>;

    /// Snapshot of every stored user, in no particular order
    async fn list(&self) -> Result<Vec<UserRecord>, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Insert a freshly identified user
    async fn create(&self, record: UserRecord) -> Result<UserRecord, DomainError>;

    /// Overwrite an existing user, failing with `NotFound` if it is gone
    async fn update(&self, record: UserRecord) -> Result<UserRecord, DomainError>;

    /// Remove a user, returning it if it existed
    async fn delete(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError>;

    /// Check if a user ID exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
