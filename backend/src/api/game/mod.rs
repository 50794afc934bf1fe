//! Module for game API endpoints.
//!
//! This module handles listing, retrieving, creating, updating and deleting
//! games.

pub mod handlers;
pub mod routes;
