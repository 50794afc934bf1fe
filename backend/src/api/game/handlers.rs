//! Handler functions for game API endpoints.
//!
//! Each handler maps one HTTP verb onto one `GameService` operation and one
//! response shape.

use crate::api::common::{
    HttpError, json_rejection_to_http, last_query_value, parse_id, service_error_to_http,
};
use crate::database::models::{GameDetail, GameWrite};
use crate::services::ListFilter;
use crate::services::game_service::GameService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Lists games, optionally filtered by `?type=<game type id>`.
#[axum::debug_handler]
pub async fn list_games(
    Extension(pool): Extension<SqlitePool>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<ResponseJson<Vec<GameDetail>>, HttpError> {
    let service = GameService::new(&pool);
    let filter = ListFilter::parse(last_query_value(&params, "type"));

    let games = service
        .list_games(filter)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(games))
}

/// Retrieves a game by ID.
#[axum::debug_handler]
pub async fn get_game(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ResponseJson<GameDetail>, HttpError> {
    let id = parse_id("Game", &id)?;
    let service = GameService::new(&pool);

    let game = service.get_game_required(id).await.map_err(|e| {
        tracing::info!("Game lookup failed for ID {}: {}", id, e);
        service_error_to_http(e)
    })?;

    Ok(ResponseJson(game))
}

/// Creates a game owned by the caller.
#[axum::debug_handler]
pub async fn create_game(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<GameWrite>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<GameDetail>), HttpError> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let service = GameService::new(&pool);

    let game = service
        .create_game(&claims, payload)
        .await
        .map_err(service_error_to_http)?;

    Ok((StatusCode::CREATED, ResponseJson(game)))
}

/// Replaces a game's writable fields. Responds without a body.
#[axum::debug_handler]
pub async fn update_game(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    payload: Result<Json<GameWrite>, JsonRejection>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id("Game", &id)?;
    let service = GameService::new(&pool);

    // Existence and ownership are settled before the body is looked at
    let game = service
        .get_owned_game(id, &claims)
        .await
        .map_err(service_error_to_http)?;

    let Json(payload) = payload.map_err(json_rejection_to_http)?;

    service
        .update_game(&game, payload)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a game owned by the caller.
#[axum::debug_handler]
pub async fn delete_game(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id("Game", &id)?;
    let service = GameService::new(&pool);

    let game = service
        .get_owned_game(id, &claims)
        .await
        .map_err(service_error_to_http)?;

    service
        .delete_game(&game)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}
