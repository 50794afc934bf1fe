//! Database repository for gamer profiles.

use crate::database::models::{Gamer, GamerDetail, GamerDetailRow};
use anyhow::Result;
use sqlx::SqlitePool;

pub struct GamerRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> GamerRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_gamer_by_id(&self, id: i64) -> Result<Option<Gamer>> {
        let gamer = sqlx::query_as::<_, Gamer>(
            "SELECT id, user_id, bio, address, phone_number FROM gamers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(gamer)
    }

    /// Retrieves the gamer profile linked to a user account.
    pub async fn get_gamer_by_user_id(&self, user_id: i64) -> Result<Option<Gamer>> {
        let gamer = sqlx::query_as::<_, Gamer>(
            "SELECT id, user_id, bio, address, phone_number FROM gamers WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(gamer)
    }

    /// Retrieves a gamer with its user expanded.
    pub async fn get_gamer_detail(&self, id: i64) -> Result<Option<GamerDetail>> {
        let row = sqlx::query_as::<_, GamerDetailRow>(
            r#"
            SELECT
            gm.id, gm.bio, gm.address, gm.phone_number,
            u.id AS user_id, u.username, u.first_name, u.last_name, u.email
            FROM gamers gm
            JOIN users u ON u.id = gm.user_id
            WHERE gm.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(GamerDetail::from))
    }
}
