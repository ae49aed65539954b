use std::sync::Arc;
use uuid::Uuid;

use crate::db::error::RepoResult;
use crate::db::models::User;
use crate::db::repo::UserRepository;

/// Thin façade over whichever repository it is handed.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, user: &User) -> RepoResult<User> {
        self.repo.create(user).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_all(&self) -> RepoResult<Vec<User>> {
        self.repo.get_all().await
    }

    pub async fn update(&self, user: &User) -> RepoResult<Option<User>> {
        self.repo.update(user).await
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        self.repo.delete(id).await
    }
}
