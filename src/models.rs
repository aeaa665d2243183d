// ABOUTME: Core data models for the trackd service
// ABOUTME: Defines User and ExerciseEntry records and their constructors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Data Models
//!
//! The two records this service persists: a [`User`] identified by a
//! normalized-unique username, and an [`ExerciseEntry`] referencing its
//! owning user by identifier. Entries are immutable once created and the
//! user never holds a collection of its entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier assigned on insert
    pub id: Uuid,
    /// Username as originally supplied
    pub username: String,
    /// Lowercase, whitespace-trimmed form used for uniqueness and lookup
    pub username_normalized: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user record with a generated identifier
    #[must_use]
    pub fn new(username: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            username_normalized: validation::normalize_username(username),
            created_at: Utc::now(),
        }
    }
}

/// A single logged exercise, owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Opaque identifier assigned on insert
    pub id: Uuid,
    /// Identifier of the owning user (no database-level constraint;
    /// validity is checked by the handler at write time)
    pub user_id: Uuid,
    /// What was done (non-empty)
    pub description: String,
    /// Duration in minutes (> 0)
    pub duration: i64,
    /// Calendar date of the exercise
    pub date: NaiveDate,
}

impl ExerciseEntry {
    /// Render the date as a human-readable calendar string with no time
    /// component, e.g. `Mon Jun 15 2020`
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format("%a %b %d %Y").to_string()
    }
}

/// Validated input for creating an exercise entry
#[derive(Debug, Clone)]
pub struct NewExercise {
    /// Owning user identifier
    pub user_id: Uuid,
    /// Non-empty description
    pub description: String,
    /// Positive duration in minutes
    pub duration: i64,
    /// Exercise date (defaults to today when the caller omitted it)
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new_normalizes_username() {
        let user = User::new("  Alice ");
        assert_eq!(user.username, "  Alice ");
        assert_eq!(user.username_normalized, "alice");
    }

    #[test]
    fn test_date_string_rendering() {
        let entry = ExerciseEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: "swim".to_owned(),
            duration: 30,
            date: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
        };
        assert_eq!(entry.date_string(), "Mon Jun 15 2020");
    }

    #[test]
    fn test_date_string_pads_single_digit_days() {
        let entry = ExerciseEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            description: "run".to_owned(),
            duration: 10,
            date: NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
        };
        assert_eq!(entry.date_string(), "Wed Apr 01 2020");
    }
}
