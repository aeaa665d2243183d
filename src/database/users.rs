// ABOUTME: User database operations
// ABOUTME: Handles user creation under the normalized-username unique index and lookups
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

use super::Database;
use crate::models::User;
use anyhow::{anyhow, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the users table and its uniqueness index
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                username_normalized TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // The unique index is the sole enforcement of the one-user-per-
        // normalized-username invariant, including under concurrent inserts.
        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username_normalized \
             ON users(username_normalized)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create a user, storing the username as supplied alongside its
    /// normalized form.
    ///
    /// A concurrent insert of the same normalized username may win the
    /// unique index; the row found afterwards is authoritative either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_user(&self, username: &str) -> Result<User> {
        let user = User::new(username);

        sqlx::query(
            r"
            INSERT INTO users (id, username, username_normalized, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(username_normalized) DO NOTHING
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.username_normalized)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        self.get_user_by_normalized_username(&user.username_normalized)
            .await?
            .ok_or_else(|| anyhow!("user insert for '{username}' left no row"))
    }

    /// Get a user by identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        self.get_user_impl("id", &user_id.to_string()).await
    }

    /// Get a user by the normalized form of their username
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_user_by_normalized_username(&self, normalized: &str) -> Result<Option<User>> {
        self.get_user_impl("username_normalized", normalized).await
    }

    /// Get all users in natural storage order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, username, username_normalized, created_at FROM users")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_user).collect()
    }

    /// Internal implementation for getting a user by a single column
    async fn get_user_impl(&self, field: &str, value: &str) -> Result<Option<User>> {
        let query = format!(
            "SELECT id, username, username_normalized, created_at FROM users WHERE {field} = $1"
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }
}

/// Map a users row to the model type
fn row_to_user(row: &SqliteRow) -> Result<User> {
    let id: String = row.try_get("id")?;
    Ok(User {
        id: Uuid::parse_str(&id)?,
        username: row.try_get("username")?,
        username_normalized: row.try_get("username_normalized")?,
        created_at: row.try_get("created_at")?,
    })
}
