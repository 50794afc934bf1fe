//! Handler functions for game type API endpoints.

use crate::api::common::{HttpError, json_rejection_to_http, parse_id, service_error_to_http};
use crate::database::models::{GameType, GameTypeWrite};
use crate::services::game_type_service::GameTypeService;
use axum::{
    extract::{Extension, Json, Path, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

#[axum::debug_handler]
pub async fn list_game_types(
    Extension(pool): Extension<SqlitePool>,
) -> Result<ResponseJson<Vec<GameType>>, HttpError> {
    let service = GameTypeService::new(&pool);

    service
        .list_game_types()
        .await
        .map(ResponseJson)
        .map_err(service_error_to_http)
}

#[axum::debug_handler]
pub async fn get_game_type(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ResponseJson<GameType>, HttpError> {
    let id = parse_id("GameType", &id)?;
    let service = GameTypeService::new(&pool);

    service
        .get_game_type_required(id)
        .await
        .map(ResponseJson)
        .map_err(service_error_to_http)
}

#[axum::debug_handler]
pub async fn create_game_type(
    Extension(pool): Extension<SqlitePool>,
    payload: Result<Json<GameTypeWrite>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<GameType>), HttpError> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let service = GameTypeService::new(&pool);

    let game_type = service
        .create_game_type(payload)
        .await
        .map_err(service_error_to_http)?;

    tracing::info!("Game type {} created", game_type.id);
    Ok((StatusCode::CREATED, ResponseJson(game_type)))
}

#[axum::debug_handler]
pub async fn update_game_type(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
    payload: Result<Json<GameTypeWrite>, JsonRejection>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id("GameType", &id)?;
    let service = GameTypeService::new(&pool);

    service
        .get_game_type_required(id)
        .await
        .map_err(service_error_to_http)?;

    let Json(payload) = payload.map_err(json_rejection_to_http)?;

    service
        .update_game_type(id, payload)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_game_type(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id("GameType", &id)?;
    let service = GameTypeService::new(&pool);

    service
        .delete_game_type(id)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}
