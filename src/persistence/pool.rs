//! Database connection pool management.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DirectoryConfig;

/// Creates a PostgreSQL connection pool sized from `config`.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn connect(config: &DirectoryConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// Applies the embedded migrations under `migrations/`.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded history diverges.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
