use crate::error::DbError;
use configuration::DatabaseSettings;
use dotenvy::dotenv;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

/// Establishes a connection pool to the MySQL database.
///
/// This function reads the `DATABASE_URL` from the environment (values from a
/// `.env` file are honoured), creates a connection pool with the configured
/// limits, and returns it. This pool can be shared across the entire
/// application.
pub async fn connect(settings: &DatabaseSettings) -> Result<MySqlPool, DbError> {
    // A missing .env file is fine; the variable may come from the real environment.
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").map_err(|_e| {
        DbError::ConnectionConfigError("not set in the environment or .env file".to_string())
    })?;

    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&database_url)
        .await?;

    tracing::debug!(
        max_connections = settings.max_connections,
        "Database connection pool ready."
    );

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// This ensures the `departments` and `employees` tables exist before the
/// report queries them.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
