//! User service: the validated entry point to the user store

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_new_user, validate_user, User, UserId, UserRecord, UserRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_user_operation;

/// User service for managing the user directory
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate a candidate and store it under a freshly minted ID
    pub async fn create(&self, user: User) -> Result<UserRecord, DomainError> {
        let result = self.create_inner(user).await;
        record_user_operation("create", result.is_ok());
        result
    }

    async fn create_inner(&self, user: User) -> Result<UserRecord, DomainError> {
        validate_new_user(&user)?;

        let record = UserRecord::new(UserId::generate(), user);
        info!(id = %record.id(), "Creating user");

        self.repository.create(record).await
    }

    /// Get a user by ID
    ///
    /// An ID that is not a UUID cannot name a stored user, so it is reported as absent.
    pub async fn get(&self, id: &str) -> Result<Option<UserRecord>, DomainError> {
        match parse_id(id) {
            Some(user_id) => self.repository.get(&user_id).await,
            None => {
                debug!(id = %id, "Ignoring lookup of malformed user ID");
                Ok(None)
            }
        }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<UserRecord>, DomainError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Replace the data of an existing user, keeping its ID
    pub async fn replace(&self, id: &str, user: User) -> Result<UserRecord, DomainError> {
        let result = self.replace_inner(id, user).await;
        record_user_operation("replace", result.is_ok());
        result
    }

    async fn replace_inner(&self, id: &str, user: User) -> Result<UserRecord, DomainError> {
        info!(id = %id, "Replacing user");

        let user_id = parse_id(id).ok_or_else(|| not_found(id))?;

        if !self.repository.exists(&user_id).await? {
            return Err(not_found(id));
        }

        validate_user(&user)?;

        // The repository re-checks existence under its write lock, so a
        // delete racing with this call surfaces as NotFound here.
        self.repository.update(UserRecord::new(user_id, user)).await
    }

    /// Delete a user, returning the removed record
    pub async fn delete(&self, id: &str) -> Result<UserRecord, DomainError> {
        let result = self.delete_inner(id).await;
        record_user_operation("delete", result.is_ok());
        result
    }

    async fn delete_inner(&self, id: &str) -> Result<UserRecord, DomainError> {
        info!(id = %id, "Deleting user");

        let user_id = parse_id(id).ok_or_else(|| not_found(id))?;

        self.repository
            .delete(&user_id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn parse_id(id: &str) -> Option<UserId> {
    id.parse().ok()
}

fn not_found(id: &str) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}
