// ABOUTME: Request validation and query-builder rules for the trackd service
// ABOUTME: Pure functions converting untrusted input into validated commands or rejections
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Validation & Query Builder
//!
//! Pure functions over untrusted request fields. Each either produces a
//! validated value or a structured [`AppError`] rejection; none has side
//! effects. Date parsing is an explicit parse-result check, never a
//! sentinel comparison.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Default result-count limit for log queries when the caller omits `limit`
pub const DEFAULT_LOG_LIMIT: i64 = 100;

/// Calendar date syntax accepted on exercise creation and log filters
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive lower/upper bound pair applied to an entry's date field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound, when present
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound, when present
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// True when no date restriction applies
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Produce the lowercase, whitespace-trimmed form of a username.
///
/// This is the key used for the uniqueness lookup and for storage of the
/// normalized column.
#[must_use]
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate that the input conforms to the persistence layer's identifier
/// format.
///
/// # Errors
///
/// Returns `InvalidIdentifier` when the input is not a valid UUID.
pub fn validate_identifier(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_identifier(raw))
}

/// Validate an exercise description.
///
/// # Errors
///
/// Returns `MissingDescription` when the field is absent or empty.
pub fn validate_description(raw: Option<&str>) -> AppResult<String> {
    match raw {
        Some(description) if !description.is_empty() => Ok(description.to_owned()),
        _ => Err(AppError::missing_description()),
    }
}

/// Validate an exercise duration in minutes.
///
/// # Errors
///
/// Returns `MissingDuration` when the field is absent, not parseable as an
/// integer, or not strictly positive. No upper bound is enforced.
pub fn validate_duration(raw: Option<&str>) -> AppResult<i64> {
    let raw = raw.ok_or_else(AppError::missing_duration)?;
    match raw.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(AppError::missing_duration()),
    }
}

/// Validate an exercise date, substituting the current day when absent.
///
/// # Errors
///
/// Returns `InvalidDate` when a supplied date does not parse as
/// `YYYY-MM-DD`.
pub fn validate_date(raw: Option<&str>) -> AppResult<NaiveDate> {
    match raw {
        None => Ok(Utc::now().date_naive()),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| AppError::invalid_date(value)),
    }
}

/// Build the inclusive date range filter for a log query.
///
/// Both bounds are optional and may coexist; neither present means no date
/// restriction.
///
/// # Errors
///
/// Returns `InvalidFromDate` / `InvalidToDate` when the corresponding bound
/// is present but unparseable.
pub fn build_date_range(from: Option<&str>, to: Option<&str>) -> AppResult<DateRange> {
    let from = from
        .map(|value| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|_| AppError::invalid_from_date(value))
        })
        .transpose()?;
    let to = to
        .map(|value| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|_| AppError::invalid_to_date(value))
        })
        .transpose()?;
    Ok(DateRange { from, to })
}

/// Parse the result-count limit for a log query, defaulting to
/// [`DEFAULT_LOG_LIMIT`].
///
/// No bound is enforced on the value itself: zero and negative limits pass
/// through and take the store's `LIMIT` semantics (zero rows and no limit
/// respectively for `SQLite`).
///
/// # Errors
///
/// Returns `InvalidLimit` when the value is present but not an integer.
pub fn parse_limit(raw: Option<&str>) -> AppResult<i64> {
    match raw {
        None => Ok(DEFAULT_LOG_LIMIT),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::invalid_limit(value)),
    }
}
