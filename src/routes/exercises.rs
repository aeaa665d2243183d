// ABOUTME: Exercise route handlers for logging exercises and querying logs
// ABOUTME: Provides exercise creation and the filtered, limited log listing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Exercise creation and log query routes
//!
//! Creation validates in a fixed order: identifier format, date, user
//! existence, description, duration. The log query deliberately skips
//! identifier pre-validation; a malformed identifier simply fails the user
//! lookup.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use super::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::NewExercise;
use crate::validation;

/// Form body for logging an exercise
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    /// What was done
    pub description: Option<String>,
    /// Duration in minutes, as an integer string
    pub duration: Option<String>,
    /// Exercise date as `YYYY-MM-DD`; today when omitted
    pub date: Option<String>,
}

/// Response after logging an exercise
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseResponse {
    /// Identifier of the owning user
    pub id: String,
    /// Stored username of the owning user
    pub username: String,
    /// Exercise date as a readable calendar string
    pub date: String,
    /// Duration in minutes
    pub duration: i64,
    /// Exercise description
    pub description: String,
}

/// Query parameters for the log listing
#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    /// Inclusive lower date bound
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
    /// Result-count limit, default 100
    pub limit: Option<String>,
}

/// One entry in a user's log
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// Exercise description
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Exercise date as a readable calendar string
    pub date: String,
}

/// A user's filtered exercise log
#[derive(Debug, Serialize, Deserialize)]
pub struct LogsResponse {
    /// Stored username
    pub username: String,
    /// Number of returned entries
    pub count: usize,
    /// User identifier
    pub id: String,
    /// The returned entries
    pub log: Vec<LogEntry>,
}

/// Exercise management routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                "/api/users/:id/exercises",
                post(Self::handle_create_exercise),
            )
            .route("/api/users/:id/logs", get(Self::handle_list_logs))
            .with_state(state)
    }

    /// Handle logging an exercise against a user
    async fn handle_create_exercise(
        State(state): State<Arc<AppState>>,
        Path(id): Path<String>,
        Form(request): Form<CreateExerciseRequest>,
    ) -> AppResult<Response> {
        let user_id = validation::validate_identifier(&id)?;
        let date = validation::validate_date(request.date.as_deref())?;

        let user = state
            .database
            .get_user(user_id)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to look up user for exercise creation");
                AppError::database("user lookup failed")
            })?
            .ok_or_else(|| AppError::user_not_found(user_id))?;

        let description = validation::validate_description(request.description.as_deref())?;
        let duration = validation::validate_duration(request.duration.as_deref())?;

        let entry = state
            .database
            .create_exercise(&NewExercise {
                user_id,
                description,
                duration,
                date,
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to insert exercise");
                AppError::database("exercise creation failed")
            })?;

        info!(
            user_id = %user.id,
            duration = entry.duration,
            "Logged exercise for '{}'",
            user.username_normalized
        );

        let response = ExerciseResponse {
            id: user.id.to_string(),
            username: user.username,
            date: entry.date_string(),
            duration: entry.duration,
            description: entry.description,
        };

        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle the filtered, limited log listing for a user
    async fn handle_list_logs(
        State(state): State<Arc<AppState>>,
        Path(id): Path<String>,
        Query(params): Query<LogsQuery>,
    ) -> AppResult<Response> {
        // No identifier pre-validation here: a malformed id cannot match
        // any stored user, so it reports the same not-found outcome.
        let user = match Uuid::parse_str(&id) {
            Ok(user_id) => state.database.get_user(user_id).await.map_err(|e| {
                error!(error = %e, "Failed to look up user for log query");
                AppError::database("user lookup failed")
            })?,
            Err(_) => None,
        };
        let user = user.ok_or_else(|| AppError::user_not_found(&id))?;

        let range = validation::build_date_range(params.from.as_deref(), params.to.as_deref())?;
        let limit = validation::parse_limit(params.limit.as_deref())?;

        let entries = state
            .database
            .get_exercises(user.id, &range, limit)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query exercise log");
                AppError::database("log query failed")
            })?;

        let log: Vec<LogEntry> = entries
            .iter()
            .map(|entry| LogEntry {
                description: entry.description.clone(),
                duration: entry.duration,
                date: entry.date_string(),
            })
            .collect();

        let response = LogsResponse {
            username: user.username,
            count: log.len(),
            id: user.id.to_string(),
            log,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
