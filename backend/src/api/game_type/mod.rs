//! Module for game type API endpoints.

pub mod handlers;
pub mod routes;
