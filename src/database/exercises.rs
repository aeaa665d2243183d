// ABOUTME: Exercise entry database operations
// ABOUTME: Handles exercise inserts and filtered, limited log queries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

use super::Database;
use crate::models::{ExerciseEntry, NewExercise};
use crate::validation::DateRange;
use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use uuid::Uuid;

impl Database {
    /// Create the exercises table and its user index
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails.
    pub(super) async fn migrate_exercises(&self) -> Result<()> {
        // user_id is deliberately not a foreign key; the handler checks the
        // user exists before inserting.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                description TEXT NOT NULL,
                duration INTEGER NOT NULL,
                date DATE NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_user_id ON exercises(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert an exercise entry, waiting for write confirmation before
    /// returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_exercise(&self, exercise: &NewExercise) -> Result<ExerciseEntry> {
        let entry = ExerciseEntry {
            id: Uuid::new_v4(),
            user_id: exercise.user_id,
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
        };

        sqlx::query(
            r"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(&entry.description)
        .bind(entry.duration)
        .bind(entry.date)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Get a user's exercise entries, restricted to the inclusive date
    /// range when bounds are present, capped at `limit` results.
    ///
    /// `limit` passes straight through to the store: `SQLite` returns zero
    /// rows for `LIMIT 0` and ignores a negative limit. No ordering is
    /// defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_exercises(
        &self,
        user_id: Uuid,
        range: &DateRange,
        limit: i64,
    ) -> Result<Vec<ExerciseEntry>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, user_id, description, duration, date FROM exercises WHERE user_id = ",
        );
        query.push_bind(user_id.to_string());

        if let Some(from) = range.from {
            query.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = range.to {
            query.push(" AND date <= ").push_bind(to);
        }
        query.push(" LIMIT ").push_bind(limit);

        let rows = query.build().fetch_all(&self.pool).await?;

        rows.iter().map(row_to_exercise).collect()
    }
}

/// Map an exercises row to the model type
fn row_to_exercise(row: &SqliteRow) -> Result<ExerciseEntry> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    Ok(ExerciseEntry {
        id: Uuid::parse_str(&id)?,
        user_id: Uuid::parse_str(&user_id)?,
        description: row.try_get("description")?,
        duration: row.try_get("duration")?,
        date: row.try_get("date")?,
    })
}
