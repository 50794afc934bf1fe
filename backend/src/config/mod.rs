//! Runtime configuration for the LevelUp server.
//!
//! Everything is read from the environment (a `.env` file is honoured in
//! development). Only the database location and the token secret are
//! mandatory; the rest fall back to defaults suited to a local SQLite setup.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string, e.g. `sqlite://levelup.db`
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    /// HS256 signing secret for access tokens
    pub jwt_secret: String,
    /// Access token lifetime
    pub jwt_expires_in_seconds: u64,
    pub server_port: u16,
    /// Work factor used when hashing gamer passwords
    pub bcrypt_cost: u32,
}

/// Reads `key`, parsing it when present and using `default` when unset.
fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DATABASE_URL` | required |
    /// | `JWT_SECRET` | required |
    /// | `DB_MAX_CONNECTIONS` | 5 |
    /// | `DB_ACQUIRE_TIMEOUT_SECONDS` | 3 |
    /// | `JWT_EXPIRES_IN_SECONDS` | 86400 |
    /// | `SERVER_PORT` | 3000 |
    /// | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL not set")?,
            max_connections: var_or("DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout_seconds: var_or("DB_ACQUIRE_TIMEOUT_SECONDS", 3)?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET not set")?,
            jwt_expires_in_seconds: var_or("JWT_EXPIRES_IN_SECONDS", 86_400)?,
            server_port: var_or("SERVER_PORT", 3000)?,
            bcrypt_cost: var_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }
}
