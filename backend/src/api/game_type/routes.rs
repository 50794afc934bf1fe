//! Defines the HTTP routes for game types.

use super::handlers::{
    create_game_type, delete_game_type, get_game_type, list_game_types, update_game_type,
};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

pub fn game_type_router() -> Router {
    Router::new()
        .route("/", get(list_game_types))
        .route(
            "/",
            post(create_game_type).route_layer(middleware::from_fn(jwt_auth)),
        )
        .route("/{id}", get(get_game_type))
        .route(
            "/{id}",
            put(update_game_type)
                .delete(delete_game_type)
                .route_layer(middleware::from_fn(jwt_auth)),
        )
}
