//! # Routes
//!
//! Builds the application router. The session layer is added by the caller so the
//! server can use the SQLite-backed store while tests use an in-memory one.

use crate::handlers::auth::{login, logout, register};
use crate::handlers::health::health_check;
use crate::handlers::users::get_current_user;
use crate::middleware::auth::require_auth;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// All API routes, without session management
///
/// Must be wrapped in a `tower_sessions::SessionManagerLayer` before serving;
/// the auth handlers and the `require_auth` guard extract `Session`.
pub fn router(state: AppState) -> Router {
    // In production, restrict this to specific origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes behind the Restricted guard
    let protected_routes = Router::new()
        .route("/api/users/me", get(get_current_user))
        .route_layer(axum_middleware::from_fn(require_auth));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
