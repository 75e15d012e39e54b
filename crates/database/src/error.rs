use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("DATABASE_URL is missing or unusable: {0}")]
    ConnectionConfigError(String),

    #[error("Database operation failed: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Schema migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}
