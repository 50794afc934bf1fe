//! Event business logic service.
//!
//! The organizer of an event is always the caller that created it. Only the
//! organizer may change or delete the event; any authenticated gamer may sign
//! up for it or leave it.

use crate::database::models::{Event, EventDetail, EventWrite};
use crate::errors::{ServiceError, ServiceResult, is_foreign_key_violation, is_unique_violation};
use crate::repositories::event_repository::EventRepository;
use crate::repositories::game_repository::GameRepository;
use crate::services::ListFilter;
use crate::services::gamer_service::GamerService;
use crate::utils::jwt::Claims;
use sqlx::SqlitePool;
use validator::Validate;

/// Service layer for event operations.
pub struct EventService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> EventService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists events, optionally narrowed to those for one game.
    pub async fn list_events(&self, filter: ListFilter) -> ServiceResult<Vec<EventDetail>> {
        let repo = EventRepository::new(self.pool);

        let events = match filter {
            ListFilter::All => repo.get_event_details(None).await?,
            ListFilter::Equals(game_id) => repo.get_event_details(Some(game_id)).await?,
            ListFilter::MatchesNothing => Vec::new(),
        };

        Ok(events)
    }

    /// Retrieves an event by ID, returning error if not found.
    pub async fn get_event_required(&self, id: i64) -> ServiceResult<EventDetail> {
        let repo = EventRepository::new(self.pool);
        repo.get_event_detail(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", id))
    }

    /// Creates an event organized by the caller.
    ///
    /// Any organizer value in the request body has already been dropped by the
    /// write shape; the organizer comes from the token only.
    pub async fn create_event(
        &self,
        claims: &Claims,
        event: EventWrite,
    ) -> ServiceResult<EventDetail> {
        let organizer = GamerService::new(self.pool).resolve_caller(claims).await?;
        self.validate_event(&event).await?;

        let repo = EventRepository::new(self.pool);
        let id = repo
            .create_event(&event, organizer.id)
            .await
            .map_err(|e| reference_error(e, &event))?;

        tracing::info!("Event {} created by gamer {}", id, organizer.id);
        self.get_event_required(id).await
    }

    /// Loads an event the caller is allowed to change.
    ///
    /// # Errors
    /// - `NotFound` if the event doesn't exist
    /// - `PermissionDenied` if the caller is not the organizer
    pub async fn get_organized_event(&self, id: i64, claims: &Claims) -> ServiceResult<Event> {
        let repo = EventRepository::new(self.pool);
        let event = repo
            .get_event_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", id))?;

        let caller = GamerService::new(self.pool).resolve_caller(claims).await?;
        if event.organizer_id != caller.id {
            return Err(ServiceError::permission_denied(
                "Only the organizer can modify this event",
            ));
        }

        Ok(event)
    }

    /// Full replacement of an event's writable fields.
    pub async fn update_event(&self, existing: &Event, event: EventWrite) -> ServiceResult<()> {
        self.validate_event(&event).await?;

        let repo = EventRepository::new(self.pool);
        repo.update_event(existing.id, &event)
            .await
            .map_err(|e| reference_error(e, &event))?;

        tracing::info!("Event {} updated", existing.id);
        Ok(())
    }

    pub async fn delete_event(&self, existing: &Event) -> ServiceResult<()> {
        let repo = EventRepository::new(self.pool);

        if !repo.delete_event(existing.id).await? {
            return Err(ServiceError::not_found("Event", existing.id));
        }

        tracing::info!("Event {} deleted", existing.id);
        Ok(())
    }

    /// Adds the caller to an event's attendees.
    ///
    /// # Errors
    /// - `NotFound` if the event doesn't exist
    /// - `AlreadyExists` if the caller already attends
    pub async fn sign_up(&self, id: i64, claims: &Claims) -> ServiceResult<()> {
        let repo = EventRepository::new(self.pool);
        if repo.get_event_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Event", id));
        }

        let gamer = GamerService::new(self.pool).resolve_caller(claims).await?;

        match repo.add_attendee(id, gamer.id).await {
            Ok(()) => {
                tracing::info!("Gamer {} signed up for event {}", gamer.id, id);
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => Err(ServiceError::already_exists(
                "Attendee",
                format!("gamer {} for event {}", gamer.id, id),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the caller from an event's attendees.
    pub async fn leave(&self, id: i64, claims: &Claims) -> ServiceResult<()> {
        let repo = EventRepository::new(self.pool);
        if repo.get_event_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Event", id));
        }

        let gamer = GamerService::new(self.pool).resolve_caller(claims).await?;

        if !repo.remove_attendee(id, gamer.id).await? {
            return Err(ServiceError::not_found(
                "Attendee",
                format!("gamer {} for event {}", gamer.id, id),
            ));
        }

        tracing::info!("Gamer {} left event {}", gamer.id, id);
        Ok(())
    }

    async fn validate_event(&self, event: &EventWrite) -> ServiceResult<()> {
        event.validate()?;

        let games = GameRepository::new(self.pool);
        if games.get_game_by_id(event.game).await?.is_none() {
            return Err(ServiceError::invalid_reference("game", event.game));
        }

        Ok(())
    }
}

fn reference_error(error: anyhow::Error, event: &EventWrite) -> ServiceError {
    if is_foreign_key_violation(&error) {
        ServiceError::invalid_reference("game", event.game)
    } else {
        error.into()
    }
}
