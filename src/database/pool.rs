use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Build the shared connection pool from `DATABASE_URL`.
///
/// The pool connects lazily so the server can start (and report a degraded
/// health status) before the database is reachable.
pub fn create_pool() -> Result<PgPool, PoolError> {
    let url =
        std::env::var("DATABASE_URL").map_err(|_| PoolError::ConfigMissing("DATABASE_URL"))?;
    let db_config = &config::config().database;

    let pool = PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.connection_timeout_secs))
        .connect_lazy(&url)?;
    Ok(pool)
}

/// Apply the schema migrations under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), PoolError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Ping the store to verify connectivity.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
