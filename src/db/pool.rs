//! PostgreSQL connection pool and database bootstrap.

use sqlx::migrate::MigrateDatabase;
use sqlx::postgres::PgPoolOptions;
use sqlx::Postgres;
use std::time::Duration;
use tracing::info;

pub type DbPool = sqlx::PgPool;

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;
    info!(max_connections, "database pool created");
    Ok(pool)
}

/// Create the database named in `database_url` unless it already exists.
/// Returns `true` when it was created by this call.
pub async fn ensure_database(database_url: &str) -> Result<bool, sqlx::Error> {
    let name = database_name(database_url);
    if Postgres::database_exists(database_url).await? {
        info!(database = %name, "database already present");
        return Ok(false);
    }
    Postgres::create_database(database_url).await?;
    info!(database = %name, "database initialized");
    Ok(true)
}

/// Database name portion of a connection URL (path after the host, query stripped).
pub fn database_name(database_url: &str) -> &str {
    let without_query = database_url.split('?').next().unwrap_or(database_url);
    let after_scheme = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);
    after_scheme
        .split_once('/')
        .map(|(_, db)| db)
        .unwrap_or("")
}
