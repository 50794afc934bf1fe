//! Database repository for event management operations.
//!
//! Events are read back in their two-level detail profile: the game with its
//! own type and owner, and the organizer with its user. Attendee ids are kept in
//! a join table and attached after the main query.

use crate::database::models::{Event, EventDetail, EventDetailRow, EventWrite};
use anyhow::Result;
use sqlx::SqlitePool;
use std::collections::HashMap;

const EVENT_DETAIL_SELECT: &str = r#"
    SELECT
    e.id, e.description, e.date, e.time,
    g.id AS game_id,
    g.title AS game_title,
    g.maker AS game_maker,
    g.skill_level AS game_skill_level,
    g.number_of_players AS game_number_of_players,
    gt.id AS game_type_id,
    gt.label AS game_type_label,
    gg.id AS game_gamer_id,
    gg.user_id AS game_gamer_user_id,
    gg.bio AS game_gamer_bio,
    gg.address AS game_gamer_address,
    gg.phone_number AS game_gamer_phone_number,
    o.id AS organizer_id,
    o.bio AS organizer_bio,
    o.address AS organizer_address,
    o.phone_number AS organizer_phone_number,
    ou.id AS organizer_user_id,
    ou.username AS organizer_username,
    ou.first_name AS organizer_first_name,
    ou.last_name AS organizer_last_name,
    ou.email AS organizer_email
    FROM events e
    JOIN games g ON g.id = e.game_id
    JOIN game_types gt ON gt.id = g.game_type_id
    JOIN gamers gg ON gg.id = g.gamer_id
    JOIN gamers o ON o.id = e.organizer_id
    JOIN users ou ON ou.id = o.user_id
"#;

/// Repository for event database operations.
pub struct EventRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new event organized by `organizer_id`.
    ///
    /// # Returns
    /// The id of the inserted event
    pub async fn create_event(&self, event: &EventWrite, organizer_id: i64) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO events (game_id, organizer_id, description, date, time)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(event.game)
        .bind(organizer_id)
        .bind(&event.description)
        .bind(event.date)
        .bind(event.time)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Retrieves a stored event row by id.
    pub async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, game_id, organizer_id, description, date, time FROM events WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(event)
    }

    /// Retrieves an event in its detail profile.
    pub async fn get_event_detail(&self, id: i64) -> Result<Option<EventDetail>> {
        let sql = format!("{EVENT_DETAIL_SELECT} WHERE e.id = ?");
        let row = sqlx::query_as::<_, EventDetailRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(row) => {
                let attendees = self.get_attendee_ids(id).await?;
                Ok(Some(row.into_detail(attendees)))
            }
            None => Ok(None),
        }
    }

    /// Lists events in their detail profile, optionally narrowed to one game.
    pub async fn get_event_details(&self, game_id: Option<i64>) -> Result<Vec<EventDetail>> {
        let rows = match game_id {
            Some(game_id) => {
                let sql = format!("{EVENT_DETAIL_SELECT} WHERE e.game_id = ? ORDER BY e.id");
                sqlx::query_as::<_, EventDetailRow>(&sql)
                    .bind(game_id)
                    .fetch_all(self.pool)
                    .await?
            }
            None => {
                let sql = format!("{EVENT_DETAIL_SELECT} ORDER BY e.id");
                sqlx::query_as::<_, EventDetailRow>(&sql)
                    .fetch_all(self.pool)
                    .await?
            }
        };

        let mut attendees = self.get_attendees_by_event(game_id).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let ids = attendees.remove(&row.id).unwrap_or_default();
                row.into_detail(ids)
            })
            .collect())
    }

    /// Replaces the writable fields of an event. The organizer is left untouched.
    pub async fn update_event(&self, id: i64, event: &EventWrite) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET game_id = ?, description = ?, date = ?, time = ?
            WHERE id = ?
            "#,
        )
        .bind(event.game)
        .bind(&event.description)
        .bind(event.date)
        .bind(event.time)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Deletes an event, returning whether a row was removed.
    pub async fn delete_event(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Records a gamer as attending an event.
    pub async fn add_attendee(&self, event_id: i64, gamer_id: i64) -> Result<()> {
        sqlx::query("INSERT INTO event_attendees (event_id, gamer_id) VALUES (?, ?)")
            .bind(event_id)
            .bind(gamer_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Removes a gamer from an event, returning whether they were attending.
    pub async fn remove_attendee(&self, event_id: i64, gamer_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM event_attendees WHERE event_id = ? AND gamer_id = ?")
            .bind(event_id)
            .bind(gamer_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gamer ids attending one event.
    pub async fn get_attendee_ids(&self, event_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar(
            "SELECT gamer_id FROM event_attendees WHERE event_id = ? ORDER BY gamer_id",
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    /// Attendee ids grouped by event, limited to the events of one game when given.
    async fn get_attendees_by_event(&self, game_id: Option<i64>) -> Result<HashMap<i64, Vec<i64>>> {
        let pairs = match game_id {
            Some(game_id) => {
                sqlx::query_as::<_, (i64, i64)>(
                    r#"
                    SELECT a.event_id, a.gamer_id
                    FROM event_attendees a
                    JOIN events e ON e.id = a.event_id
                    WHERE e.game_id = ?
                    ORDER BY a.event_id, a.gamer_id
                    "#,
                )
                .bind(game_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, (i64, i64)>(
                    "SELECT event_id, gamer_id FROM event_attendees ORDER BY event_id, gamer_id",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        let mut by_event: HashMap<i64, Vec<i64>> = HashMap::new();
        for (event_id, gamer_id) in pairs {
            by_event.entry(event_id).or_default().push(gamer_id);
        }

        Ok(by_event)
    }
}
