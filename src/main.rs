//! # Session Auth Server
//!
//! Username/password authentication for a JSON API, with logins kept in
//! server-side sessions.
//!
//! ## Endpoints
//! - `POST /api/auth/register`: create an account
//! - `POST /api/auth/login`: verify credentials and start a session
//! - `GET /api/auth/logout`: destroy the session
//! - `GET /api/users/me`: the logged-in user (restricted)
//! - `GET /health`: liveness probe

mod auth;        // Password hashing, request types, session state machine
mod config;      // Configuration management (environment variables, settings)
mod db;          // Credential store (users table)
mod error;       // Error handling and custom error types
mod handlers;    // HTTP request handlers (routes)
mod middleware;  // Restricted guard and credential checks
mod routes;      // Router assembly
mod state;       // Shared application state
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::state::AppState;
use time::Duration;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// 1. Sets up logging
/// 2. Loads configuration from environment variables
/// 3. Connects to the database and runs migrations
/// 4. Starts a background task that deletes expired sessions
/// 5. Configures HTTP sessions and the router
/// 6. Starts the HTTP server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,session_auth_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config).await?;
    tracing::info!("Application state initialized");

    // Sessions are stored server-side in the same SQLite database as users;
    // the client only holds the session id cookie
    let session_store = SqliteStore::new(app_state.db.clone());
    session_store.migrate().await?;

    // Expired sessions are never loaded again but stay in the table until removed
    let cleanup_store = session_store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(600));
        loop {
            interval.tick().await;
            tracing::debug!("Running expired session cleanup");
            if let Err(e) = cleanup_store.delete_expired().await {
                tracing::error!("Session cleanup failed: {:?}", e);
            }
        }
    });

    let session_layer = SessionManagerLayer::new(session_store).with_expiry(Expiry::OnInactivity(
        Duration::hours(config.session_inactivity_hours),
    ));

    let app = routes::router(app_state).layer(session_layer);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
