//! Main entry point for the LevelUp backend.
//!
//! This file initializes tracing, loads configuration, prepares the database
//! and starts the Axum web server.

use levelup_api::{build_app, config::Config, database::Database};
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    db.migrate().await?;
    let pool = db.pool().clone();

    let app = build_app(pool, config.clone());

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Starting LevelUp server on port {}", config.server_port);
    axum::serve(listener, app).await?;

    db.close().await;
    Ok(())
}
