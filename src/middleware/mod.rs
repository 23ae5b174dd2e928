//! # Middleware Module
//!
//! Checks that run before a handler and may short-circuit the request.
//!
//! ## Our Middleware
//! - `auth`: The Restricted guard; rejects requests whose session has no user
//! - `validation`: Credential checks composed by the auth endpoints
//!   (username free, username exists, password length)

pub mod auth;
pub mod validation;
