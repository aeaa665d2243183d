// ABOUTME: Unified error handling for the trackd service
// ABOUTME: Defines error codes, HTTP status mapping, and the JSON error envelope
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Error Handling
//!
//! Centralized error types for the service. Every failure surfaces as an
//! [`AppError`] carrying an [`ErrorCode`], and is rendered to clients as a
//! structured `{"error": {"code", "message"}}` envelope with a
//! differentiated HTTP status: 400 for validation failures, 404 for a
//! missing user, 500 for persistence failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (400)
    #[serde(rename = "MISSING_USERNAME")]
    MissingUsername,
    #[serde(rename = "INVALID_IDENTIFIER")]
    InvalidIdentifier,
    #[serde(rename = "INVALID_DATE")]
    InvalidDate,
    #[serde(rename = "INVALID_FROM_DATE")]
    InvalidFromDate,
    #[serde(rename = "INVALID_TO_DATE")]
    InvalidToDate,
    #[serde(rename = "INVALID_LIMIT")]
    InvalidLimit,
    #[serde(rename = "MISSING_DESCRIPTION")]
    MissingDescription,
    #[serde(rename = "MISSING_DURATION")]
    MissingDuration,

    // Not found (404)
    #[serde(rename = "USER_NOT_FOUND")]
    UserNotFound,

    // Internal (500)
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            // 400 Bad Request
            ErrorCode::MissingUsername
            | ErrorCode::InvalidIdentifier
            | ErrorCode::InvalidDate
            | ErrorCode::InvalidFromDate
            | ErrorCode::InvalidToDate
            | ErrorCode::InvalidLimit
            | ErrorCode::MissingDescription
            | ErrorCode::MissingDuration => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ErrorCode::UserNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ErrorCode::DatabaseError | ErrorCode::ConfigError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Human-readable description of the error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::MissingUsername => "A username is required",
            ErrorCode::InvalidIdentifier => "The user identifier is malformed",
            ErrorCode::InvalidDate => "The date could not be parsed",
            ErrorCode::InvalidFromDate => "The 'from' date could not be parsed",
            ErrorCode::InvalidToDate => "The 'to' date could not be parsed",
            ErrorCode::InvalidLimit => "The limit is not a number",
            ErrorCode::MissingDescription => "A description is required",
            ErrorCode::MissingDuration => "A duration in minutes is required",
            ErrorCode::UserNotFound => "The requested user does not exist",
            ErrorCode::DatabaseError => "Database operation failed",
            ErrorCode::ConfigError => "Configuration error encountered",
            ErrorCode::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Username field absent or blank
    #[must_use]
    pub fn missing_username() -> Self {
        Self::new(ErrorCode::MissingUsername, "username is required")
    }

    /// Malformed user identifier
    pub fn invalid_identifier(raw: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidIdentifier,
            format!("user id '{raw}' is not a valid identifier"),
        )
    }

    /// Unparseable exercise date
    pub fn invalid_date(raw: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidDate, format!("date '{raw}' is invalid"))
    }

    /// Unparseable `from` bound on a log query
    pub fn invalid_from_date(raw: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidFromDate,
            format!("from date '{raw}' is invalid"),
        )
    }

    /// Unparseable `to` bound on a log query
    pub fn invalid_to_date(raw: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidToDate,
            format!("to date '{raw}' is invalid"),
        )
    }

    /// Unparseable result-count limit
    pub fn invalid_limit(raw: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidLimit,
            format!("limit '{raw}' is not a number"),
        )
    }

    /// Description field absent or empty
    #[must_use]
    pub fn missing_description() -> Self {
        Self::new(ErrorCode::MissingDescription, "description is required")
    }

    /// Duration field absent, non-numeric, or not a positive integer
    #[must_use]
    pub fn missing_duration() -> Self {
        Self::new(
            ErrorCode::MissingDuration,
            "duration is required in minutes and must be a positive integer",
        )
    }

    /// No user with the given identifier
    pub fn user_not_found(id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::UserNotFound, format!("user '{id}' not found"))
    }

    /// Persistence failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Generic internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Conversion from `anyhow::Error` for propagated persistence failures
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::new(ErrorCode::InternalError, error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    pub code: ErrorCode,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        assert_eq!(
            AppError::missing_duration().http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::invalid_limit("abc").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            AppError::user_not_found("deadbeef").http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_database_error_maps_to_500() {
        assert_eq!(
            AppError::database("connection lost").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = ErrorResponse::from(AppError::missing_description());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"]["code"], "MISSING_DESCRIPTION");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("description"));
    }
}
