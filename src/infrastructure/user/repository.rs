//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRecord, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// One lock guards the whole map: lookups share it, mutations hold it
/// exclusively for their full read-check-write sequence.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(records: Vec<UserRecord>) -> Self {
        let users: HashMap<UserId, User> =
            records.into_iter().map(UserRecord::into_parts).collect();

        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).map(|user| UserRecord::new(*id, user.clone())))
    }

    async fn list(&self) -> Result<Vec<UserRecord>, DomainError> {
        let users = self.users.read().await;

        let result = users
            .iter()
            .map(|(id, user)| UserRecord::new(*id, user.clone()))
            .collect();

        Ok(result)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }

    async fn create(&self, record: UserRecord) -> Result<UserRecord, DomainError> {
        let mut users = self.users.write().await;
        let (id, user) = record.clone().into_parts();

        users.insert(id, user);

        Ok(record)
    }

    async fn update(&self, record: UserRecord) -> Result<UserRecord, DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(record.id()) {
            Some(stored) => {
                *stored = record.user().clone();
                Ok(record)
            }
            None => Err(DomainError::not_found(format!(
                "User '{}' not found",
                record.id()
            ))),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<Option<UserRecord>, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(id).map(|user| UserRecord::new(*id, user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(first: &str) -> UserRecord {
        UserRecord::new(
            UserId::generate(),
            User::new(first, "Silva", "A biography that is long enough."),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let record = create_test_record("Ana");

        repo.create(record.clone()).await.unwrap();

        let retrieved = repo.get(record.id()).await.unwrap();
        assert_eq!(retrieved, Some(record));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryUserRepository::new();

        let retrieved = repo.get(&UserId::generate()).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_update() {
        let repo = InMemoryUserRepository::new();
        let record = create_test_record("Ana");

        repo.create(record.clone()).await.unwrap();

        let changed = UserRecord::new(
            *record.id(),
            User::new("Beatriz", "Costa", "Another biography, long enough."),
        );
        repo.update(changed.clone()).await.unwrap();

        let retrieved = repo.get(record.id()).await.unwrap().unwrap();
        assert_eq!(retrieved, changed);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let repo = InMemoryUserRepository::new();
        let record = create_test_record("Ana");

        let result = repo.update(record.clone()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        assert!(repo.get(record.id()).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let record = create_test_record("Ana");

        repo.create(record.clone()).await.unwrap();

        let deleted = repo.delete(record.id()).await.unwrap();
        assert_eq!(deleted, Some(record.clone()));

        let retrieved = repo.get(record.id()).await.unwrap();
        assert!(retrieved.is_none());

        let deleted_again = repo.delete(record.id()).await.unwrap();
        assert!(deleted_again.is_none());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_test_record("Ana")).await.unwrap();
        repo.create(create_test_record("Bruno")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);

        let count = repo.count().await.unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = InMemoryUserRepository::new();
        let record = create_test_record("Ana");

        assert!(!repo.exists(record.id()).await.unwrap());
        repo.create(record.clone()).await.unwrap();
        assert!(repo.exists(record.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_with_users() {
        let records = vec![create_test_record("Ana"), create_test_record("Bruno")];
        let first = records[0].clone();

        let repo = InMemoryUserRepository::with_users(records);

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.get(first.id()).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_not_lost() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(create_test_record(&format!("User{i}"))).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 64);
    }
}
