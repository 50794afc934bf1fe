//! Gamer identity service.
//!
//! Resolves the authenticated caller to their gamer profile. Every operation
//! that records ownership goes through here.

use crate::database::models::{Gamer, GamerDetail};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::gamer_repository::GamerRepository;
use crate::utils::jwt::Claims;
use sqlx::SqlitePool;

pub struct GamerService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> GamerService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolves the caller's gamer from validated token claims.
    ///
    /// # Errors
    /// Returns `ServiceError::Unauthorized` when the token's gamer no longer
    /// exists or belongs to a different user than the token subject.
    pub async fn resolve_caller(&self, claims: &Claims) -> ServiceResult<Gamer> {
        let user_id = claims.user_id()?;
        let repo = GamerRepository::new(self.pool);

        match repo.get_gamer_by_id(claims.gamer_id).await? {
            Some(gamer) if gamer.user_id == user_id => Ok(gamer),
            _ => Err(ServiceError::unauthorized("No gamer profile for this token")),
        }
    }

    /// Detail profile of the caller.
    pub async fn get_caller_detail(&self, claims: &Claims) -> ServiceResult<GamerDetail> {
        let gamer = self.resolve_caller(claims).await?;
        let repo = GamerRepository::new(self.pool);

        repo.get_gamer_detail(gamer.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Gamer", gamer.id))
    }
}
