//! Module for database access repositories.
//!
//! Each repository wraps the shared connection pool and owns the SQL for one
//! table (or one table plus its join rows).

pub mod event_repository;
pub mod game_repository;
pub mod game_type_repository;
pub mod gamer_repository;
pub mod user_repository;
