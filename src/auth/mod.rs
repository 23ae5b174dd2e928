//! # Auth Module
//!
//! Username/password authentication backed by server-side sessions.
//!
//! ## Submodules
//! - `types`: Request body types for the auth endpoints
//! - `password`: bcrypt hashing and verification
//! - `session`: The session lifecycle as an explicit state value
//!
//! ## Flow Overview
//!
//! ### Registration
//! 1. Client posts `{username, password}` to `/api/auth/register`
//! 2. Server checks the name is free and the password is long enough
//! 3. Password is hashed with bcrypt and the user row is inserted
//!
//! ### Login
//! 1. Client posts `{username, password}` to `/api/auth/login`
//! 2. Server checks password length, then that the user exists
//! 3. Password is verified against the stored digest
//! 4. If valid, the user is stored in the session (`Anonymous` → `Authenticated`)
//!
//! ### Logout
//! The session is destroyed if it holds a user (`Authenticated` → `Anonymous`).

pub mod password;
pub mod session;
pub mod types;
