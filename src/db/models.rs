use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a user with a freshly generated id. The id is fixed from here on,
    /// the store never assigns one.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(id={}, name={}, email={})", self.id, self.name, self.email)
    }
}

// Ids are stored as hyphenated TEXT, so the mapping is done by hand instead of
// relying on sqlx's BLOB encoding for Uuid.
impl<'r> FromRow<'r, SqliteRow> for User {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let raw_id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&raw_id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("John Doe", "johndoe@example.com");
        let b = User::new("John Doe", "johndoe@example.com");

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_name_keeps_id() {
        let user = User::new("John Doe", "johndoe@example.com");
        let id = user.id();

        let renamed = user.with_name("Jane Doe");
        assert_eq!(renamed.id(), id);
        assert_eq!(renamed.name, "Jane Doe");
        assert_eq!(renamed.email, "johndoe@example.com");
    }

    #[test]
    fn test_display() {
        let user = User::new("John Doe", "johndoe@example.com");
        assert_eq!(
            user.to_string(),
            format!("User(id={}, name=John Doe, email=johndoe@example.com)", user.id())
        );
    }
}
