// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database setup, app construction, and an oneshot request helper
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(dead_code)]

//! Shared test utilities for `trackd`
//!
//! Common setup to reduce duplication across integration tests: a quiet
//! test logger, an in-memory database, and a request builder that drives
//! the axum router through `tower::ServiceExt::oneshot` without a running
//! server.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde::Serialize;
use std::sync::{Arc, Once};
use tower::ServiceExt;

use trackd::database::Database;
use trackd::routes::{self, AppState};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Arc<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    Arc::new(database)
}

/// Build the full application router over a fresh in-memory database
pub async fn create_test_app() -> (Router, Arc<Database>) {
    let database = create_test_database().await;
    let state = Arc::new(AppState::new(database.clone()));
    (routes::router(state), database)
}

/// Helper to build and execute HTTP requests against axum routers
pub struct TestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl TestRequest {
    /// Create a new GET request
    pub fn get(uri: &str) -> Self {
        Self {
            method: Method::GET,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Create a new POST request
    pub fn post(uri: &str) -> Self {
        Self {
            method: Method::POST,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a urlencoded form body to the request
    pub fn form<T: Serialize>(mut self, data: &T) -> Self {
        self.body = Some(serde_urlencoded::to_string(data).expect("Failed to serialize form"));
        self.headers.push((
            header::CONTENT_TYPE.as_str().to_owned(),
            "application/x-www-form-urlencoded".to_owned(),
        ));
        self
    }

    /// Add a raw urlencoded body to the request
    pub fn raw_form(mut self, body: &str) -> Self {
        self.body = Some(body.to_owned());
        self.headers.push((
            header::CONTENT_TYPE.as_str().to_owned(),
            "application/x-www-form-urlencoded".to_owned(),
        ));
        self
    }

    /// Execute the request against an axum router
    pub async fn send(self, app: Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);

        for (key, value) in self.headers {
            builder = builder.header(key, value);
        }

        let body = self.body.unwrap_or_default();
        let request = builder
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = app.oneshot(request).await.expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse { status, json }
    }
}

/// A decoded response from the router
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub json: serde_json::Value,
}

impl TestResponse {
    /// The error code string from the structured error envelope
    pub fn error_code(&self) -> &str {
        self.json["error"]["code"]
            .as_str()
            .expect("Response has no error code")
    }
}

/// Register a user through the API and return their identifier
pub async fn register_user(app: &Router, username: &str) -> String {
    let response = TestRequest::post("/api/users")
        .form(&[("username", username)])
        .send(app.clone())
        .await;
    assert!(
        response.status.is_success(),
        "User registration failed: {:?}",
        response.json
    );
    response.json["id"]
        .as_str()
        .expect("Registration response has no id")
        .to_owned()
}

/// Log an exercise through the API for the given user
pub async fn log_exercise(app: &Router, user_id: &str, description: &str, duration: &str, date: Option<&str>) -> TestResponse {
    let mut fields = vec![
        ("description", description),
        ("duration", duration),
    ];
    if let Some(date) = date {
        fields.push(("date", date));
    }
    TestRequest::post(&format!("/api/users/{user_id}/exercises"))
        .form(&fields)
        .send(app.clone())
        .await
}
