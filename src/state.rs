//! # Application State
//!
//! Shared state accessible to all request handlers.
//!
//! ## The State Pattern
//! Instead of creating new database connections for each request, we:
//! 1. Create a connection pool once at startup
//! 2. Store it in AppState
//! 3. Share it across all request handlers
//! 4. Axum clones the state for each request (cheap: the pool is reference counted)

use crate::auth::password::PasswordHasher;
use crate::config::Config;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;

/// Shared application state
///
/// - Database connection pool (the credential store)
/// - Password hasher configured with the bcrypt cost
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Also handed to the session store at startup, so users and sessions live in
    /// the same SQLite file.
    pub db: SqlitePool,

    pub hasher: PasswordHasher,
}

impl AppState {
    /// Initialize application state
    ///
    /// Connects to the database and runs the embedded migrations (creates the
    /// `users` table if it doesn't exist).
    ///
    /// # Errors
    /// Returns an error if the database connection or a migration fails.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePool::connect(&config.database_url).await?;

        // Migrations live in ./migrations and are embedded at compile time
        sqlx::migrate!("./migrations").run(&db).await?;

        Ok(Self::from_parts(db, PasswordHasher::new(config.bcrypt_cost)))
    }

    pub fn from_parts(db: SqlitePool, hasher: PasswordHasher) -> Self {
        AppState { db, hasher }
    }
}
