// ABOUTME: Main library entry point for the trackd exercise tracking service
// ABOUTME: Exposes configuration, persistence, validation, and HTTP route modules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![deny(unsafe_code)]

//! # trackd
//!
//! A small REST service that tracks users and their logged exercises.
//! Users are registered by username, exercises are recorded against a user,
//! and a user's exercise log can be fetched with an inclusive date range
//! filter and a result-count limit.
//!
//! ## Architecture
//!
//! - **validation**: pure request validation and query construction rules
//! - **database**: `SQLite` persistence through `sqlx`
//! - **routes**: axum handlers for the four API operations
//! - **config** / **logging**: environment-driven runtime configuration

/// Environment-based server configuration
pub mod config;
/// Database access layer for users and exercises
pub mod database;
/// Unified error handling with `AppError` and the HTTP error envelope
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Core data models
pub mod models;
/// HTTP route definitions and handlers
pub mod routes;
/// Request validation and query-builder rules
pub mod validation;
