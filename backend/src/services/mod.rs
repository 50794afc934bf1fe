//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between the handlers and the repositories,
//! such as resolving the caller's identity or enforcing ownership.

pub mod event_service;
pub mod game_service;
pub mod game_type_service;
pub mod gamer_service;

/// Foreign key filter taken from a list query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    /// No filter supplied
    All,
    /// Keep rows whose key equals the value
    Equals(i64),
    /// Supplied value is not an id, so no row can match
    MatchesNothing,
}

impl ListFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => ListFilter::All,
            Some(value) => match value.trim().parse::<i64>() {
                Ok(id) => ListFilter::Equals(id),
                Err(_) => ListFilter::MatchesNothing,
            },
        }
    }
}
