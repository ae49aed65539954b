use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::error::{RepoResult, RepositoryError};
use crate::db::models::User;
use crate::db::repo::UserRepository;

/// HashMap-backed stand-in for the SQLite repository.
///
/// A duplicate id on `create` is reported as `RowCount { actual: 0 }`, where
/// SQLite reports the primary key violation as `Database`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> RepoResult<User> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id()) {
            return Err(RepositoryError::RowCount {
                operation: "INSERT",
                expected: 1,
                actual: 0,
            });
        }
        users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn get_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.lock().await.values().cloned().collect())
    }

    async fn update(&self, user: &User) -> RepoResult<Option<User>> {
        let mut users = self.users.lock().await;
        match users.get_mut(&user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        Ok(self.users.lock().await.remove(&id).is_some())
    }
}
