//! User Management API - Main Application Entry Point
//!
//! A small REST API for creating, reading, updating and deleting user records
//! held in memory. Every endpoint except `/` requires a shared bearer token.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: in-process map guarded by a read/write lock
//! - **Authentication**: placeholder bearer token, compared by SHA-256 digest
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Initialize logging (stdout, or an append-only file)
//! 3. Create the user store
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured address

mod app;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;
#[cfg(test)]
mod test_support;

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::{middleware::auth::ApiToken, store::UserStore};

/// Install the global subscriber. Reads `RUST_LOG` (defaults to "info").
///
/// With `LOG_FILE` set, events are appended to that file through a
/// non-blocking writer. The returned guard flushes it on drop, so it must be
/// held for the life of the server.
fn init_logging(config: &config::Config) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let Some(path) = &config.log_file else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return Ok(None);
    };

    let (writer, guard) = append_writer(Path::new(path))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Non-blocking writer appending to `path`, created if missing.
fn append_writer(path: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_appender::non_blocking(file))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    let _log_guard = init_logging(&config)?;
    tracing::info!("Configuration loaded");

    let store = UserStore::shared();
    let app = app::build_router(store, ApiToken::new(&config.api_token));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
