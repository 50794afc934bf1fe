//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, the write shapes accepted from clients, and the response
//! profiles returned by the API. Response profiles expand foreign keys into
//! nested objects to a fixed depth; write shapes take raw identifiers.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use sqlx::FromRow;
use validator::Validate;

// ============================================================================
// Stored rows
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Gamer {
    pub id: i64,
    pub user_id: i64,
    pub bio: String,
    pub address: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GameType {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub maker: String,
    pub skill_level: i64,
    pub number_of_players: i64,
    pub game_type_id: i64,
    pub gamer_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: i64,
    pub game_id: i64,
    pub organizer_id: i64,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

// ============================================================================
// Write shapes
// ============================================================================

/// Data needed to insert a user together with its gamer profile.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub address: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GameTypeWrite {
    #[validate(length(min = 1, max = 50, message = "Label must be between 1-50 characters"))]
    pub label: String,
}

/// Writable fields of a game. The owner is never part of this shape.
///
/// Integer fields accept either JSON numbers or numeric strings.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GameWrite {
    #[validate(length(min = 1, max = 50, message = "Title must be between 1-50 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "Maker must be between 1-50 characters"))]
    pub maker: String,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1, max = 10, message = "Skill level must be between 1 and 10"))]
    pub skill_level: i64,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1, message = "Number of players must be at least 1"))]
    pub number_of_players: i64,

    /// Game type primary key
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub game_type: i64,
}

/// Writable fields of an event. The organizer is never part of this shape.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventWrite {
    /// Game primary key
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub game: i64,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Description must be between 1-500 characters"
    ))]
    pub description: String,

    pub date: NaiveDate,
    pub time: NaiveTime,
}

// ============================================================================
// Response profiles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Gamer with `user` left as the user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamerSummary {
    pub id: i64,
    pub user: i64,
    pub bio: String,
    pub address: String,
    pub phone_number: String,
}

/// Gamer with `user` expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamerDetail {
    pub id: i64,
    pub user: UserSummary,
    pub bio: String,
    pub address: String,
    pub phone_number: String,
}

/// Game expanded one level: game type and owner inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: i64,
    pub title: String,
    pub maker: String,
    pub skill_level: i64,
    pub number_of_players: i64,
    pub game_type: GameType,
    pub gamer: GamerSummary,
}

/// Event expanded two levels: the game carries its own game type and owner,
/// the organizer carries its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: i64,
    pub game: GameDetail,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub organizer: GamerDetail,
    pub attendees: Vec<i64>,
}

// ============================================================================
// Joined rows backing the response profiles
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct GamerDetailRow {
    pub id: i64,
    pub bio: String,
    pub address: String,
    pub phone_number: String,
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct GameDetailRow {
    pub id: i64,
    pub title: String,
    pub maker: String,
    pub skill_level: i64,
    pub number_of_players: i64,
    pub game_type_id: i64,
    pub game_type_label: String,
    pub gamer_id: i64,
    pub gamer_user_id: i64,
    pub gamer_bio: String,
    pub gamer_address: String,
    pub gamer_phone_number: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct EventDetailRow {
    pub id: i64,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[sqlx(flatten)]
    pub game: EventGameColumns,
    #[sqlx(flatten)]
    pub organizer: EventOrganizerColumns,
}

#[derive(Debug, Clone, FromRow)]
pub struct EventGameColumns {
    pub game_id: i64,
    pub game_title: String,
    pub game_maker: String,
    pub game_skill_level: i64,
    pub game_number_of_players: i64,
    pub game_type_id: i64,
    pub game_type_label: String,
    pub game_gamer_id: i64,
    pub game_gamer_user_id: i64,
    pub game_gamer_bio: String,
    pub game_gamer_address: String,
    pub game_gamer_phone_number: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct EventOrganizerColumns {
    pub organizer_id: i64,
    pub organizer_bio: String,
    pub organizer_address: String,
    pub organizer_phone_number: String,
    pub organizer_user_id: i64,
    pub organizer_username: String,
    pub organizer_first_name: String,
    pub organizer_last_name: String,
    pub organizer_email: String,
}

impl From<GamerDetailRow> for GamerDetail {
    fn from(row: GamerDetailRow) -> Self {
        GamerDetail {
            id: row.id,
            user: UserSummary {
                id: row.user_id,
                username: row.username,
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
            bio: row.bio,
            address: row.address,
            phone_number: row.phone_number,
        }
    }
}

impl From<GameDetailRow> for GameDetail {
    fn from(row: GameDetailRow) -> Self {
        GameDetail {
            id: row.id,
            title: row.title,
            maker: row.maker,
            skill_level: row.skill_level,
            number_of_players: row.number_of_players,
            game_type: GameType {
                id: row.game_type_id,
                label: row.game_type_label,
            },
            gamer: GamerSummary {
                id: row.gamer_id,
                user: row.gamer_user_id,
                bio: row.gamer_bio,
                address: row.gamer_address,
                phone_number: row.gamer_phone_number,
            },
        }
    }
}

impl From<EventGameColumns> for GameDetail {
    fn from(cols: EventGameColumns) -> Self {
        GameDetail {
            id: cols.game_id,
            title: cols.game_title,
            maker: cols.game_maker,
            skill_level: cols.game_skill_level,
            number_of_players: cols.game_number_of_players,
            game_type: GameType {
                id: cols.game_type_id,
                label: cols.game_type_label,
            },
            gamer: GamerSummary {
                id: cols.game_gamer_id,
                user: cols.game_gamer_user_id,
                bio: cols.game_gamer_bio,
                address: cols.game_gamer_address,
                phone_number: cols.game_gamer_phone_number,
            },
        }
    }
}

impl From<EventOrganizerColumns> for GamerDetail {
    fn from(cols: EventOrganizerColumns) -> Self {
        GamerDetail {
            id: cols.organizer_id,
            user: UserSummary {
                id: cols.organizer_user_id,
                username: cols.organizer_username,
                first_name: cols.organizer_first_name,
                last_name: cols.organizer_last_name,
                email: cols.organizer_email,
            },
            bio: cols.organizer_bio,
            address: cols.organizer_address,
            phone_number: cols.organizer_phone_number,
        }
    }
}

impl EventDetailRow {
    /// Builds the response profile, attaching the attendee ids loaded separately.
    pub fn into_detail(self, attendees: Vec<i64>) -> EventDetail {
        EventDetail {
            id: self.id,
            game: self.game.into(),
            description: self.description,
            date: self.date,
            time: self.time,
            organizer: self.organizer.into(),
            attendees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_write() -> GameWrite {
        GameWrite {
            title: "Clue".to_string(),
            maker: "Milton Bradley".to_string(),
            skill_level: 5,
            number_of_players: 6,
            game_type: 1,
        }
    }

    #[test]
    fn test_game_write_accepts_valid_input() {
        assert!(game_write().validate().is_ok());
    }

    #[test]
    fn test_game_write_rejects_out_of_range_numbers() {
        let mut game = game_write();
        game.skill_level = 11;
        game.number_of_players = 0;

        let errors = game.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("skill_level"));
        assert!(fields.contains_key("number_of_players"));
        assert!(!fields.contains_key("title"));
    }

    #[test]
    fn test_event_write_ignores_organizer_in_body() {
        let body = serde_json::json!({
            "game": 3,
            "description": "Game night",
            "date": "2021-05-01",
            "time": "19:30:00",
            "organizer": 42
        });

        let event: EventWrite = serde_json::from_value(body).unwrap();
        assert_eq!(event.game, 3);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2021, 5, 1).unwrap());
        assert_eq!(event.time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    }

    #[test]
    fn test_write_shapes_accept_numeric_strings() {
        let game: GameWrite = serde_json::from_value(serde_json::json!({
            "title": "Clue",
            "maker": "Milton Bradley",
            "skill_level": "5",
            "number_of_players": 6,
            "game_type": "2"
        }))
        .unwrap();
        assert_eq!(game.skill_level, 5);
        assert_eq!(game.game_type, 2);

        let event: EventWrite = serde_json::from_value(serde_json::json!({
            "game": "3",
            "description": "Game night",
            "date": "2021-05-01",
            "time": "19:30:00"
        }))
        .unwrap();
        assert_eq!(event.game, 3);

        let bad = serde_json::from_value::<GameWrite>(serde_json::json!({
            "title": "Clue",
            "maker": "Milton Bradley",
            "skill_level": "five",
            "number_of_players": 6,
            "game_type": 2
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_game_detail_row_nests_type_and_owner() {
        let row = GameDetailRow {
            id: 7,
            title: "Sorry".to_string(),
            maker: "Hasbro".to_string(),
            skill_level: 2,
            number_of_players: 4,
            game_type_id: 1,
            game_type_label: "Board Game".to_string(),
            gamer_id: 3,
            gamer_user_id: 9,
            gamer_bio: "bio".to_string(),
            gamer_address: "addr".to_string(),
            gamer_phone_number: "555".to_string(),
        };

        let value = serde_json::to_value(GameDetail::from(row)).unwrap();
        assert_eq!(value["game_type"]["label"], "Board Game");
        assert_eq!(value["gamer"]["id"], 3);
        assert_eq!(value["gamer"]["user"], 9);
    }
}
