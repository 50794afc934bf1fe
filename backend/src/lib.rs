//! LevelUp backend library.
//!
//! Exposes the application router so the binary and the integration tests
//! assemble the exact same service.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;

use crate::api::common::ApiResponse;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use sqlx::SqlitePool;

/// Builds the full router with the pool and configuration attached.
pub fn build_app(pool: SqlitePool, config: Config) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(auth::routes::auth_router())
        .nest("/gametypes", api::game_type::routes::game_type_router())
        .nest("/games", api::game::routes::game_router())
        .nest("/events", api::event::routes::event_router())
        .layer(Extension(pool))
        .layer(Extension(config))
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "LevelUp API",
            "version": env!("CARGO_PKG_VERSION")
        }),
        "Welcome to LevelUp API",
    ))
}
