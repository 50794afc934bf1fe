//! Central module for organizing the application's resource API endpoints.
//!
//! This module acts as a top-level container for the resource controllers
//! (game types, games, events), excluding the authentication routes which
//! are handled separately.

pub mod common;
pub mod event;
pub mod game;
pub mod game_type;
