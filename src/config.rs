//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: SQLite database connection string
//! - `BCRYPT_COST`: Work factor used when hashing passwords (default: 8)
//! - `SESSION_INACTIVITY_HOURS`: Hours of inactivity before a session expires (default: 24)

use anyhow::{bail, Context, Result};
use std::env;

/// Lowest and highest work factors accepted by bcrypt.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Application configuration
///
/// This struct holds all configuration values needed to run the server.
/// All fields are public for easy access from other modules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// SQLite database connection URL
    /// Format: "sqlite:filename.db?mode=rwc"
    /// The "mode=rwc" means: read, write, create if not exists
    pub database_url: String,

    /// bcrypt work factor
    ///
    /// Each increment doubles the time needed to hash (and to brute force) a password.
    pub bcrypt_cost: u32,

    /// Sessions expire after this many hours without a request
    pub session_inactivity_hours: i64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file (if present) are loaded first using dotenvy,
    /// then every value is read through [`Config::from_lookup`].
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=8080
    /// DATABASE_URL=sqlite:auth.db?mode=rwc
    /// BCRYPT_COST=8
    /// SESSION_INACTIVITY_HOURS=24
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// Missing keys fall back to defaults; present but unparsable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
            None => 8080,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("BCRYPT_COST must be an integer, got '{raw}'"))?,
            None => 8,
        };
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            bail!(
                "BCRYPT_COST must be between {} and {}, got {bcrypt_cost}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            );
        }

        let session_inactivity_hours = match lookup("SESSION_INACTIVITY_HOURS") {
            Some(raw) => raw.parse().with_context(|| {
                format!("SESSION_INACTIVITY_HOURS must be an integer, got '{raw}'")
            })?,
            None => 24,
        };
        if session_inactivity_hours <= 0 {
            bail!("SESSION_INACTIVITY_HOURS must be positive, got {session_inactivity_hours}");
        }

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:auth.db?mode=rwc".to_string()),
            bcrypt_cost,
            session_inactivity_hours,
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Example: "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
