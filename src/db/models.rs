//! # Database Models
//!
//! Data structures that map to database tables.
//!
//! The `users` table is the only table owned by this application; session rows
//! are managed by `tower-sessions-sqlx-store`.

use serde::{Deserialize, Serialize};

/// User account information
///
/// Represents one row of the `users` table.
///
/// ## Derive Macros Explained
/// - `Serialize`/`Deserialize`: the full row is stored in the server-side session
///   after login, so it must round-trip through the session store
/// - `sqlx::FromRow`: Automatically maps database rows to this struct
///
/// ## Security Note
/// `password` holds the bcrypt digest, never the plaintext. The digest must not be
/// sent to clients; use [`PublicUser`] for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Server-assigned identifier (SQLite rowid)
    pub id: i64,

    /// Unique username, used for login/lookup
    pub username: String,

    /// bcrypt digest of the user's password
    pub password: String,
}

/// The parts of a [`User`] that are safe to return over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
