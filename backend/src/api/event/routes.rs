//! Defines the HTTP routes for event management.

use super::handlers::{
    create_event, delete_event, get_event_by_id, get_events, leave, sign_up, update_event,
};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn event_router() -> Router {
    Router::new()
        .route("/", get(get_events))
        .route(
            "/",
            post(create_event).route_layer(middleware::from_fn(jwt_auth)),
        )
        .route("/{id}", get(get_event_by_id))
        .route(
            "/{id}",
            put(update_event)
                .delete(delete_event)
                .route_layer(middleware::from_fn(jwt_auth)),
        )
        .route(
            "/{id}/signup",
            post(sign_up).route_layer(middleware::from_fn(jwt_auth)),
        )
        .route(
            "/{id}/leave",
            delete(leave).route_layer(middleware::from_fn(jwt_auth)),
        )
}
