//! Handler functions for event management API endpoints.

use crate::api::common::{
    ApiResponse, HttpError, json_rejection_to_http, last_query_value, parse_id,
    service_error_to_http,
};
use crate::database::models::{EventDetail, EventWrite};
use crate::services::ListFilter;
use crate::services::event_service::EventService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Retrieves all events, or only those for `?game=<id>`.
#[axum::debug_handler]
pub async fn get_events(
    Extension(pool): Extension<SqlitePool>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<ResponseJson<Vec<EventDetail>>, HttpError> {
    let service = EventService::new(&pool);
    let filter = ListFilter::parse(last_query_value(&params, "game"));

    let events = service
        .list_events(filter)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(events))
}

/// Retrieves a specific event by ID.
#[axum::debug_handler]
pub async fn get_event_by_id(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<String>,
) -> Result<ResponseJson<EventDetail>, HttpError> {
    let id = parse_id("Event", &id)?;
    let service = EventService::new(&pool);

    let event = service
        .get_event_required(id)
        .await
        .map_err(service_error_to_http)?;

    Ok(ResponseJson(event))
}

/// Creates an event organized by the caller.
#[axum::debug_handler]
pub async fn create_event(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<EventWrite>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<EventDetail>), HttpError> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let service = EventService::new(&pool);

    let event = service
        .create_event(&claims, payload)
        .await
        .map_err(service_error_to_http)?;

    Ok((StatusCode::CREATED, ResponseJson(event)))
}

/// Replaces an event's writable fields. Responds without a body.
#[axum::debug_handler]
pub async fn update_event(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    payload: Result<Json<EventWrite>, JsonRejection>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id("Event", &id)?;
    let service = EventService::new(&pool);

    let event = service
        .get_organized_event(id, &claims)
        .await
        .map_err(service_error_to_http)?;

    let Json(payload) = payload.map_err(json_rejection_to_http)?;

    service
        .update_event(&event, payload)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an event organized by the caller.
#[axum::debug_handler]
pub async fn delete_event(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id("Event", &id)?;
    let service = EventService::new(&pool);

    let event = service
        .get_organized_event(id, &claims)
        .await
        .map_err(service_error_to_http)?;

    service
        .delete_event(&event)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Adds the caller to an event's attendees.
#[axum::debug_handler]
pub async fn sign_up(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<i64>>), HttpError> {
    let id = parse_id("Event", &id)?;
    let service = EventService::new(&pool);

    service
        .sign_up(id, &claims)
        .await
        .map_err(service_error_to_http)?;

    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(id, "Gamer added to the event")),
    ))
}

/// Removes the caller from an event's attendees.
#[axum::debug_handler]
pub async fn leave(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id("Event", &id)?;
    let service = EventService::new(&pool);

    service
        .leave(id, &claims)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}
