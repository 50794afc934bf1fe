//! Authentication module for gamer accounts, tokens, and access control.
//!
//! This module provides the public interface for authentication-related functionality
//! such as registration, login, token validation and the authorization middleware.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
