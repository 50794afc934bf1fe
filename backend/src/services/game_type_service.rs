//! Game type business logic service.

use crate::database::models::{GameType, GameTypeWrite};
use crate::errors::{ServiceError, ServiceResult, is_foreign_key_violation};
use crate::repositories::game_type_repository::GameTypeRepository;
use sqlx::SqlitePool;
use validator::Validate;

/// Service layer for game type operations.
pub struct GameTypeService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> GameTypeService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_game_types(&self) -> ServiceResult<Vec<GameType>> {
        let repo = GameTypeRepository::new(self.pool);
        Ok(repo.get_game_types().await?)
    }

    /// Retrieves a game type, returning error if not found.
    pub async fn get_game_type_required(&self, id: i64) -> ServiceResult<GameType> {
        let repo = GameTypeRepository::new(self.pool);
        repo.get_game_type_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("GameType", id))
    }

    pub async fn create_game_type(&self, game_type: GameTypeWrite) -> ServiceResult<GameType> {
        game_type.validate()?;

        let repo = GameTypeRepository::new(self.pool);
        Ok(repo.create_game_type(&game_type).await?)
    }

    /// Full replacement of a game type's writable fields.
    pub async fn update_game_type(&self, id: i64, game_type: GameTypeWrite) -> ServiceResult<()> {
        game_type.validate()?;

        let repo = GameTypeRepository::new(self.pool);
        repo.update_game_type(id, &game_type).await?;
        Ok(())
    }

    /// Deletes a game type that no game uses.
    ///
    /// # Errors
    /// - `NotFound` if the id is unknown
    /// - `Conflict` if games still reference it
    pub async fn delete_game_type(&self, id: i64) -> ServiceResult<()> {
        let repo = GameTypeRepository::new(self.pool);

        match repo.delete_game_type(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::not_found("GameType", id)),
            Err(e) if is_foreign_key_violation(&e) => Err(ServiceError::conflict(
                "GameType is still referenced by games",
            )),
            Err(e) => Err(e.into()),
        }
    }
}
