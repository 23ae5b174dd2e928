//! # Database Module
//!
//! This module organizes all database-related code into submodules:
//! - `models`: Data structures (User)
//! - `users`: Credential store operations (create, lookup by username or id)
//!
//! Session rows are not handled here; `tower-sessions-sqlx-store` owns that table.

pub mod models;
pub mod users;
