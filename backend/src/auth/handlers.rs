//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for registration, login and
//! the caller's own profile, and hand off to `auth::service` for the core logic.

use crate::api::common::{HttpError, json_rejection_to_http, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::config::Config;
use crate::database::models::GamerDetail;
use crate::services::gamer_service::GamerService;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;

/// Handle gamer registration request
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<RegisterResponse>), HttpError> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let auth_service = AuthService::new(&pool, &config);

    match auth_service.register(payload).await {
        Ok(response) => Ok((StatusCode::CREATED, ResponseJson(response))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Config>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ResponseJson<LoginResponse>, HttpError> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;
    let auth_service = AuthService::new(&pool, &config);

    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Get the caller's gamer profile from the token
#[axum::debug_handler]
pub async fn me(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<GamerDetail>, HttpError> {
    let service = GamerService::new(&pool);

    service
        .get_caller_detail(&claims)
        .await
        .map(ResponseJson)
        .map_err(service_error_to_http)
}
