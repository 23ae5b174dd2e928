//! # Error Handling
//!
//! This module defines the application error type and converts it into HTTP responses.
//!
//! Two categories of failure flow through [`AppError`]:
//! - **Validation errors**: deliberate, user-facing rejections carrying their own
//!   status code and message (e.g. `422 Username taken`)
//! - **Infrastructure errors**: unexpected failures from the database, the session
//!   store or the password hasher. These are logged and reported as a generic 500.
//!
//! Every error body has the shape `{ "message": "..." }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// A structured rejection raised by a validation check
///
/// Constructed inline at the point of failure; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub status: StatusCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// `401 You shall not pass!`
    pub fn not_authenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "You shall not pass!")
    }

    /// `422 Username taken`
    pub fn username_taken() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Username taken")
    }

    /// `422 Username required`
    pub fn username_required() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Username required")
    }

    /// `401 Invalid credentials`
    pub fn invalid_credentials() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }

    /// `422 Password must be longer than 3 chars`
    pub fn password_too_short() -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Password must be longer than 3 chars",
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Application-wide error type
///
/// The `#[from]` attributes let `?` convert library errors into `AppError`
/// automatically inside handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// A business rule was violated; carries the exact status/message to return
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Database errors (SQLx library errors)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session store errors (loading, saving or destroying a session)
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing or verification failed
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Resource not found errors (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors (500)
    ///
    /// Used for unexpected errors that shouldn't normally occur
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(e) => e.status,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Session(_)
            | AppError::Hashing(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into an HTTP response
///
/// Validation messages are shown verbatim. Infrastructure errors are logged with
/// full detail and replaced by a generic message so internals don't leak.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(e) => e.message.clone(),
            AppError::NotFound(_) => self.to_string(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Session(e) => {
                tracing::error!("Session error: {:?}", e);
                "Session error".to_string()
            }
            AppError::Hashing(e) => {
                tracing::error!("Hashing error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_keep_their_status_and_message() {
        let (status, body) = render(ValidationError::username_taken().into()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({ "message": "Username taken" }));
    }

    #[tokio::test]
    async fn infrastructure_errors_are_opaque_500s() {
        let (status, body) = render(AppError::Database(sqlx::Error::PoolTimedOut)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Database error" }));

        let (status, body) = render(AppError::Internal("join failed".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal server error" }));
    }
}
