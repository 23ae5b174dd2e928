//! # User Handlers
//!
//! Handlers for user-related operations.
//! Currently only has endpoint for getting current user profile.

use crate::db::{
    models::{PublicUser, User},
    users,
};
use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, Extension, Json};

/// Get current authenticated user's profile
///
/// ## Route
/// GET /api/users/me
///
/// ## Authentication
/// Requires authentication (protected by the `require_auth` middleware, which
/// places the session user in the request extensions)
///
/// ## Response
/// ```json
/// {
///   "id": 1,
///   "username": "sue"
/// }
/// ```
///
/// The row is re-read from the database so the response reflects the store, not
/// the copy taken at login. The password digest is never returned.
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(session_user): Extension<User>,
) -> AppResult<Json<PublicUser>> {
    let user = users::find_by_id(&state.db, session_user.id).await?;

    Ok(Json(PublicUser::from(user)))
}
