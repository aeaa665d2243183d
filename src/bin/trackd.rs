// ABOUTME: Server binary for the trackd exercise tracking service
// ABOUTME: Loads configuration, opens the database, and serves the HTTP API
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # trackd Server Binary
//!
//! Starts the exercise tracking REST API with environment-driven
//! configuration and a `SQLite`-backed store.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use trackd::config::ServerConfig;
use trackd::database::Database;
use trackd::logging;
use trackd::routes::{self, AppState};

#[derive(Parser)]
#[command(name = "trackd")]
#[command(about = "Exercise tracking service - REST API for users and exercise logs")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting trackd exercise tracking service");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url).await?;
    info!("Database ready at {}", config.database_url);

    let state = Arc::new(AppState::new(Arc::new(database)));
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
