//! Database repository for game management operations.
//!
//! Provides CRUD operations for games. Reads come back in the game detail
//! profile, with the game type and owning gamer joined in.

use crate::database::models::{Game, GameDetail, GameDetailRow, GameWrite};
use anyhow::Result;
use sqlx::SqlitePool;

const GAME_DETAIL_SELECT: &str = r#"
    SELECT
    g.id, g.title, g.maker, g.skill_level, g.number_of_players,
    gt.id AS game_type_id,
    gt.label AS game_type_label,
    gm.id AS gamer_id,
    gm.user_id AS gamer_user_id,
    gm.bio AS gamer_bio,
    gm.address AS gamer_address,
    gm.phone_number AS gamer_phone_number
    FROM games g
    JOIN game_types gt ON gt.id = g.game_type_id
    JOIN gamers gm ON gm.id = g.gamer_id
"#;

/// Repository for game database operations.
///
/// Handles all persistence operations for the Game entity,
/// maintaining relationships with game types and gamers.
pub struct GameRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new game owned by `gamer_id`.
    ///
    /// # Returns
    /// The id of the inserted game
    pub async fn create_game(&self, game: &GameWrite, gamer_id: i64) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO games (title, maker, skill_level, number_of_players, game_type_id, gamer_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&game.title)
        .bind(&game.maker)
        .bind(game.skill_level)
        .bind(game.number_of_players)
        .bind(game.game_type)
        .bind(gamer_id)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Retrieves a stored game row by id.
    pub async fn get_game_by_id(&self, id: i64) -> Result<Option<Game>> {
        let game = sqlx::query_as::<_, Game>(
            r#"
            SELECT id, title, maker, skill_level, number_of_players, game_type_id, gamer_id
            FROM games WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(game)
    }

    /// Retrieves a game in its detail profile.
    pub async fn get_game_detail(&self, id: i64) -> Result<Option<GameDetail>> {
        let sql = format!("{GAME_DETAIL_SELECT} WHERE g.id = ?");
        let row = sqlx::query_as::<_, GameDetailRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(GameDetail::from))
    }

    /// Lists games in their detail profile, optionally narrowed to one game type.
    pub async fn get_game_details(&self, game_type_id: Option<i64>) -> Result<Vec<GameDetail>> {
        let rows = match game_type_id {
            Some(game_type_id) => {
                let sql = format!("{GAME_DETAIL_SELECT} WHERE g.game_type_id = ? ORDER BY g.id");
                sqlx::query_as::<_, GameDetailRow>(&sql)
                    .bind(game_type_id)
                    .fetch_all(self.pool)
                    .await?
            }
            None => {
                let sql = format!("{GAME_DETAIL_SELECT} ORDER BY g.id");
                sqlx::query_as::<_, GameDetailRow>(&sql)
                    .fetch_all(self.pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(GameDetail::from).collect())
    }

    /// Replaces the writable fields of a game. The owner is left untouched.
    pub async fn update_game(&self, id: i64, game: &GameWrite) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE games
            SET title = ?, maker = ?, skill_level = ?, number_of_players = ?, game_type_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&game.title)
        .bind(&game.maker)
        .bind(game.skill_level)
        .bind(game.number_of_players)
        .bind(game.game_type)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a game, returning whether a row was removed.
    pub async fn delete_game(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
