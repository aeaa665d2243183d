// ABOUTME: User route handlers for registration and listing
// ABOUTME: Provides the create-or-fetch user endpoint and the full user listing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! User registration and listing routes
//!
//! Registration is an idempotent create-or-fetch: posting a username whose
//! normalized form already exists returns the stored user without writing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use super::AppState;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::validation;

/// Form body for user registration
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Requested username; uniqueness is judged on the normalized form
    pub username: Option<String>,
}

/// A user's public identity
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// Stored username
    pub username: String,
    /// User identifier
    pub id: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            id: user.id.to_string(),
        }
    }
}

/// User management routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                "/api/users",
                post(Self::handle_create_user).get(Self::handle_list_users),
            )
            .with_state(state)
    }

    /// Handle user registration (create-or-fetch)
    async fn handle_create_user(
        State(state): State<Arc<AppState>>,
        Form(request): Form<CreateUserRequest>,
    ) -> AppResult<Response> {
        let username = request.username.unwrap_or_default();
        let normalized = validation::normalize_username(&username);
        if normalized.is_empty() {
            return Err(AppError::missing_username());
        }

        let existing = state
            .database
            .get_user_by_normalized_username(&normalized)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to look up user by username");
                AppError::database("user lookup failed")
            })?;

        // Already registered: idempotent fetch, no write performed
        if let Some(user) = existing {
            return Ok((StatusCode::OK, Json(UserResponse::from(&user))).into_response());
        }

        let user = state.database.create_user(&username).await.map_err(|e| {
            error!(error = %e, "Failed to create user");
            AppError::database("user creation failed")
        })?;

        info!(user_id = %user.id, "Registered user '{}'", user.username_normalized);

        Ok((StatusCode::CREATED, Json(UserResponse::from(&user))).into_response())
    }

    /// Handle listing every registered user
    async fn handle_list_users(State(state): State<Arc<AppState>>) -> AppResult<Response> {
        let users = state.database.get_users().await.map_err(|e| {
            error!(error = %e, "Failed to list users");
            AppError::database("user listing failed")
        })?;

        let response: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
