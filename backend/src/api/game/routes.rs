//! Defines the HTTP routes for games.
//!
//! Reads are public. Writes go through the JWT middleware.

use super::handlers::{create_game, delete_game, get_game, list_games, update_game};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

pub fn game_router() -> Router {
    Router::new()
        .route("/", get(list_games))
        .route(
            "/",
            post(create_game).route_layer(middleware::from_fn(jwt_auth)),
        )
        .route("/{id}", get(get_game))
        .route(
            "/{id}",
            put(update_game)
                .delete(delete_game)
                .route_layer(middleware::from_fn(jwt_auth)),
        )
}
