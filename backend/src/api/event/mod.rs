//! Module for event management API endpoints.
//!
//! This module handles the event resource and the RSVP actions on it.

pub mod handlers;
pub mod routes;
