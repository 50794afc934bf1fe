//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the database connection pool,
//! applying the embedded schema migrations, and exposing the pool to the rest
//! of the application.

use crate::config::Config;
use anyhow::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use std::time::Duration;

pub mod models;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Initializes the database connection pool.
    pub async fn new(config: &Config) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    /// Opens a private in-memory database.
    ///
    /// SQLite keeps an in-memory database per connection, so the pool is pinned
    /// to a single connection that never expires.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed.");
    }
}
