//! Database repository for game type operations.

use crate::database::models::{GameType, GameTypeWrite};
use anyhow::Result;
use sqlx::SqlitePool;

/// Repository for game type database operations.
pub struct GameTypeRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> GameTypeRepository<'a> {
    /// Creates a new GameTypeRepository instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new game type.
    pub async fn create_game_type(&self, game_type: &GameTypeWrite) -> Result<GameType> {
        let game_type = sqlx::query_as::<_, GameType>(
            "INSERT INTO game_types (label) VALUES (?) RETURNING id, label",
        )
        .bind(&game_type.label)
        .fetch_one(self.pool)
        .await?;

        Ok(game_type)
    }

    /// Retrieves a game type by id.
    pub async fn get_game_type_by_id(&self, id: i64) -> Result<Option<GameType>> {
        let game_type =
            sqlx::query_as::<_, GameType>("SELECT id, label FROM game_types WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(game_type)
    }

    /// Lists every game type.
    pub async fn get_game_types(&self) -> Result<Vec<GameType>> {
        let game_types =
            sqlx::query_as::<_, GameType>("SELECT id, label FROM game_types ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(game_types)
    }

    /// Replaces the writable fields of a game type.
    pub async fn update_game_type(&self, id: i64, game_type: &GameTypeWrite) -> Result<()> {
        sqlx::query("UPDATE game_types SET label = ? WHERE id = ?")
            .bind(&game_type.label)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Deletes a game type, returning whether a row was removed.
    pub async fn delete_game_type(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM game_types WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
