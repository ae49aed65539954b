use thiserror::Error;

pub type RepoResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{operation} affected {actual} rows, expected {expected}")]
    RowCount {
        operation: &'static str,
        expected: u64,
        actual: u64,
    },
}
