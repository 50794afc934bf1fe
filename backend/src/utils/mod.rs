//! Shared helpers that don't belong to a single resource.

pub mod jwt;
