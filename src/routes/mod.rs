// ABOUTME: Route module organization for the trackd HTTP API
// ABOUTME: Assembles per-domain routers over the shared application state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # HTTP Routes
//!
//! Route definitions organized by domain. Each domain module contains the
//! route table and thin handler functions; the handlers orchestrate the
//! validation layer and the database and shape the JSON response.

/// Exercise creation and log query routes
pub mod exercises;
/// Health check and system status routes
pub mod health;
/// User registration and listing routes
pub mod users;

pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use users::UserRoutes;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::database::Database;

/// Shared state injected into every handler.
///
/// The database is passed explicitly rather than held in a module-wide
/// singleton so tests can run each router against its own store.
pub struct AppState {
    /// Persistence layer, safe for concurrent use
    pub database: Arc<Database>,
}

impl AppState {
    /// Bundle the shared resources for the router
    #[must_use]
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

/// Assemble the full application router
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .merge(UserRoutes::routes(state.clone()))
        .merge(ExerciseRoutes::routes(state))
        .merge(HealthRoutes::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Root service descriptor
async fn handle_index() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "trackd",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /api/users",
            "GET /api/users",
            "POST /api/users/:id/exercises",
            "GET /api/users/:id/logs"
        ]
    }))
}
