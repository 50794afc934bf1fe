//! Game business logic service.
//!
//! Handles all game-related business operations: ownership is assigned from
//! the caller on create, and only the owner may change or delete a game.

use crate::database::models::{Game, GameDetail, GameWrite};
use crate::errors::{ServiceError, ServiceResult, is_foreign_key_violation};
use crate::repositories::game_repository::GameRepository;
use crate::repositories::game_type_repository::GameTypeRepository;
use crate::services::ListFilter;
use crate::services::gamer_service::GamerService;
use crate::utils::jwt::Claims;
use sqlx::SqlitePool;
use validator::Validate;

/// Service layer for game operations.
pub struct GameService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> GameService<'a> {
    /// Creates a new GameService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists games, optionally narrowed to one game type.
    pub async fn list_games(&self, filter: ListFilter) -> ServiceResult<Vec<GameDetail>> {
        let repo = GameRepository::new(self.pool);

        let games = match filter {
            ListFilter::All => repo.get_game_details(None).await?,
            ListFilter::Equals(game_type_id) => repo.get_game_details(Some(game_type_id)).await?,
            ListFilter::MatchesNothing => Vec::new(),
        };

        Ok(games)
    }

    /// Retrieves a game by ID, returning error if not found.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the game doesn't exist
    pub async fn get_game_required(&self, id: i64) -> ServiceResult<GameDetail> {
        let repo = GameRepository::new(self.pool);
        repo.get_game_detail(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", id))
    }

    /// Creates a game owned by the caller.
    ///
    /// # Arguments
    /// * `claims` - Validated token claims of the caller
    /// * `game` - Writable game fields from the request body
    ///
    /// # Returns
    /// The created game in its detail profile
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Validation failures
    /// - A game type id that does not exist
    /// - A token whose user has no gamer profile
    pub async fn create_game(&self, claims: &Claims, game: GameWrite) -> ServiceResult<GameDetail> {
        let owner = GamerService::new(self.pool).resolve_caller(claims).await?;
        self.validate_game(&game).await?;

        let repo = GameRepository::new(self.pool);
        let id = repo
            .create_game(&game, owner.id)
            .await
            .map_err(|e| reference_error(e, &game))?;

        tracing::info!("Game {} created by gamer {}", id, owner.id);
        self.get_game_required(id).await
    }

    /// Loads a game the caller is allowed to change.
    ///
    /// # Errors
    /// - `NotFound` if the game doesn't exist
    /// - `PermissionDenied` if the caller does not own it
    pub async fn get_owned_game(&self, id: i64, claims: &Claims) -> ServiceResult<Game> {
        let repo = GameRepository::new(self.pool);
        let game = repo
            .get_game_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", id))?;

        let caller = GamerService::new(self.pool).resolve_caller(claims).await?;
        if game.gamer_id != caller.id {
            return Err(ServiceError::permission_denied(
                "Only the owner can modify this game",
            ));
        }

        Ok(game)
    }

    /// Full replacement of a game's writable fields.
    pub async fn update_game(&self, existing: &Game, game: GameWrite) -> ServiceResult<()> {
        self.validate_game(&game).await?;

        let repo = GameRepository::new(self.pool);
        repo.update_game(existing.id, &game)
            .await
            .map_err(|e| reference_error(e, &game))?;

        tracing::info!("Game {} updated", existing.id);
        Ok(())
    }

    /// Deletes a game no event uses.
    ///
    /// # Errors
    /// Returns `ServiceError::Conflict` if events still reference it
    pub async fn delete_game(&self, existing: &Game) -> ServiceResult<()> {
        let repo = GameRepository::new(self.pool);

        match repo.delete_game(existing.id).await {
            Ok(true) => {
                tracing::info!("Game {} deleted", existing.id);
                Ok(())
            }
            Ok(false) => Err(ServiceError::not_found("Game", existing.id)),
            Err(e) if is_foreign_key_violation(&e) => Err(ServiceError::conflict(
                "Game is still referenced by events",
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Field rules plus foreign key resolution.
    async fn validate_game(&self, game: &GameWrite) -> ServiceResult<()> {
        game.validate()?;

        let game_types = GameTypeRepository::new(self.pool);
        if game_types
            .get_game_type_by_id(game.game_type)
            .await?
            .is_none()
        {
            return Err(ServiceError::invalid_reference("game_type", game.game_type));
        }

        Ok(())
    }
}

/// The game type can vanish between the check and the write.
fn reference_error(error: anyhow::Error, game: &GameWrite) -> ServiceError {
    if is_foreign_key_violation(&error) {
        ServiceError::invalid_reference("game_type", game.game_type)
    } else {
        error.into()
    }
}
