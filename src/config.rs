use std::env;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a positive number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Connection settings for the user database.
///
/// Only `url` and `max_connections` shape the pool. The remaining fields are
/// carried as-is for the connection provider and never interpreted here.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub driver: String,
    pub max_connections: u32,
    pub auto_commit: bool,
    pub isolation_level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://default.db".to_string(),
            username: "user".to_string(),
            password: "user".to_string(),
            driver: "sqlite".to_string(),
            max_connections: 10,
            auto_commit: true,
            isolation_level: "REPEATABLE_READ".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to the
    /// defaults for anything missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "DATABASE_MAX_CONNECTIONS",
                        value,
                    });
                }
            },
            None => defaults.max_connections,
        };

        let auto_commit = match lookup("DATABASE_AUTO_COMMIT") {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidBool {
                        var: "DATABASE_AUTO_COMMIT",
                        value,
                    });
                }
            },
            None => defaults.auto_commit,
        };

        Ok(Self {
            url: lookup("DATABASE_URL").unwrap_or(defaults.url),
            username: lookup("DATABASE_USER").unwrap_or(defaults.username),
            password: lookup("DATABASE_PASSWORD").unwrap_or(defaults.password),
            driver: lookup("DATABASE_DRIVER").unwrap_or(defaults.driver),
            max_connections,
            auto_commit,
            isolation_level: lookup("DATABASE_ISOLATION").unwrap_or(defaults.isolation_level),
        })
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("driver", &self.driver)
            .field("max_connections", &self.max_connections)
            .field("auto_commit", &self.auto_commit)
            .field("isolation_level", &self.isolation_level)
            .finish()
    }
}
