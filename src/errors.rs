use thiserror::Error;

/// Error type for schema building and DDL execution.
#[derive(Error, Debug)]
pub enum DbError {
    /// Error returned by the database while running a statement.
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    /// Configuration error (e.g., missing DATABASE_URL or unknown dialect).
    #[error("Configuration error: {0}")]
    Config(String),
    /// Connection error (e.g., the pool could not be opened).
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Error: {0}")]
    General(String),
}
