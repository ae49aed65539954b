use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::db::error::{RepoResult, RepositoryError};
use crate::db::models::User;

/// CRUD access to stored users.
///
/// Absent rows are reported as `None`/`false`. Driver failures and
/// unexpected row counts are errors.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> RepoResult<User>;
    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;
    async fn get_all(&self) -> RepoResult<Vec<User>>;
    async fn update(&self, user: &User) -> RepoResult<Option<User>>;
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

pub async fn create_user_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tuser (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn expect_one(operation: &'static str, actual: u64) -> RepoResult<()> {
    if actual == 1 {
        Ok(())
    } else {
        warn!(operation, actual, "Unexpected affected row count");
        Err(RepositoryError::RowCount {
            operation,
            expected: 1,
            actual,
        })
    }
}

// Each call checks out its own connection; the guard hands it back to the pool
// when it goes out of scope, whichever way the call ends.
#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> RepoResult<User> {
        debug!(id = %user.id(), "Inserting user");
        let mut conn = self.pool.acquire().await?;

        let affected = sqlx::query("INSERT INTO tuser (id, name, email) VALUES (?, ?, ?)")
            .bind(user.id().to_string())
            .bind(&user.name)
            .bind(&user.email)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        expect_one("INSERT", affected)?;
        Ok(user.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        debug!(%id, "Fetching user");
        let mut conn = self.pool.acquire().await?;

        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM tuser WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&mut *conn)
            .await?;

        Ok(user)
    }

    async fn get_all(&self) -> RepoResult<Vec<User>> {
        debug!("Fetching all users");
        let mut conn = self.pool.acquire().await?;

        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM tuser")
            .fetch_all(&mut *conn)
            .await?;

        Ok(users)
    }

    async fn update(&self, user: &User) -> RepoResult<Option<User>> {
        debug!(id = %user.id(), "Updating user");
        let mut conn = self.pool.acquire().await?;

        let affected = sqlx::query("UPDATE tuser SET name = ?, email = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id().to_string())
            .execute(&mut *conn)
            .await?
            .rows_affected();

        if affected == 0 {
            debug!(id = %user.id(), "No user to update");
            return Ok(None);
        }
        expect_one("UPDATE", affected)?;
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        debug!(%id, "Deleting user");
        let mut conn = self.pool.acquire().await?;

        let affected = sqlx::query("DELETE FROM tuser WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(affected == 1)
    }
}
