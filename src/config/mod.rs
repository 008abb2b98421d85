//! Application configuration loaded from environment.

use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_DB_NAME: &str = "voting_system";

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. `0.0.0.0:3000`).
    pub server_addr: SocketAddr,
    /// PostgreSQL connection URL, including the database name.
    pub database_url: String,
    /// Maximum pooled connections.
    pub pool_size: u32,
    /// How long to wait for a pooled connection.
    pub acquire_timeout: Duration,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let server_addr: SocketAddr = server_addr
            .parse()
            .map_err(|_| ConfigLoadError::InvalidServerAddr)?;

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => compose_database_url(&lookup)?,
        };

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigLoadError::InvalidPoolSize)?,
            None => 5,
        };

        let acquire_timeout = match lookup("DB_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigLoadError::InvalidAcquireTimeout)?,
            None => Duration::from_secs(5),
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            server_addr,
            database_url,
            pool_size,
            acquire_timeout,
            log_level,
        })
    }
}

fn compose_database_url<F>(lookup: &F) -> Result<String, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let port = match lookup("DB_PORT") {
        Some(v) => v.parse::<u16>().map_err(|_| ConfigLoadError::InvalidDbPort)?,
        None => 5432,
    };
    let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

    let credentials = if password.is_empty() {
        user
    } else {
        format!("{}:{}", user, password)
    };
    Ok(format!("postgres://{}@{}:{}/{}", credentials, host, port, name))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Invalid SERVER_ADDR")]
    InvalidServerAddr,
    #[error("Invalid DB_PORT")]
    InvalidDbPort,
    #[error("Invalid DB_POOL_SIZE (must be a positive integer)")]
    InvalidPoolSize,
    #[error("Invalid DB_ACQUIRE_TIMEOUT_SECS")]
    InvalidAcquireTimeout,
}
