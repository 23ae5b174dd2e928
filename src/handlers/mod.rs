//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers (controllers).
//! Each handler processes a specific API endpoint.
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `auth`: Authentication endpoints (register, login, logout)
//! - `users`: User-related endpoints (get current user profile)
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from request (JSON body, session, shared state)
//! 2. Run the credential checks the endpoint needs, in order
//! 3. Perform the terminal action and return a JSON response
//!
//! Errors are returned as `AppError` and rendered by its `IntoResponse` impl.

pub mod auth;
pub mod health;
pub mod users;
