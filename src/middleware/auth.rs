use crate::auth::session::SessionState;
use crate::db::models::User;
use crate::error::{AppError, ValidationError};
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

/// Passes only when the session holds a user
pub fn restricted(state: &SessionState) -> Result<&User, ValidationError> {
    state.user().ok_or_else(ValidationError::not_authenticated)
}

/// Guard for protected routes; makes the session user available as an extension
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let state = SessionState::load(&session).await?;
    let user = restricted(&state)?.clone();

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
