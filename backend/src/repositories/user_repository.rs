//! Database repository for user management operations.
//!
//! Provides creation and lookup of login accounts. A user is always created
//! together with its gamer profile.

use crate::database::models::{CreateUser, Gamer, User};
use anyhow::Result;
use sqlx::SqlitePool;

/// Repository for user database operations.
///
/// Handles all persistence operations for the User entity,
/// maintaining the one-to-one relationship with gamers.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user and its gamer profile in one transaction.
    ///
    /// # Arguments
    /// * `user` - CreateUser DTO containing account and profile details
    ///
    /// # Returns
    /// The newly created User and Gamer rows
    pub async fn create_user_with_gamer(&self, user: CreateUser) -> Result<(User, Gamer)> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, email, first_name, last_name)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, username, password_hash, email, first_name, last_name
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_one(&mut *tx)
        .await?;

        let gamer = sqlx::query_as::<_, Gamer>(
            r#"
            INSERT INTO gamers (user_id, bio, address, phone_number)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, bio, address, phone_number
            "#,
        )
        .bind(created.id)
        .bind(&user.bio)
        .bind(&user.address)
        .bind(&user.phone_number)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((created, gamer))
    }

    /// Retrieves a user by their username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, email, first_name, last_name
            FROM users WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Checks if a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }
}
