//! # Credential Checks
//!
//! Independent predicates over an auth request body. Each check either passes or
//! short-circuits with a [`ValidationError`]; store failures pass through as
//! infrastructure errors.
//!
//! Endpoints don't call the checks directly. They go through
//! [`validate_registration`] or [`validate_login`], which fix the order and hand
//! back what the checks learned (the accepted password, the user row) so the
//! terminal handler neither repeats a lookup nor has to assume a check ran.

use crate::auth::types::CredentialsBody;
use crate::db::{models::User, users};
use crate::error::{AppError, AppResult, ValidationError};
use sqlx::SqlitePool;

/// Passwords must be strictly longer than this many characters
pub const MIN_PASSWORD_CHARS: usize = 3;

/// A register body that passed every check
#[derive(Debug, PartialEq, Eq)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// A login body that passed every check; `user` is the row the existence check found
#[derive(Debug, PartialEq, Eq)]
pub struct LoginAttempt<'a> {
    pub user: User,
    pub password: &'a str,
}

/// Username free, then password length
///
/// A taken username is reported even when the password is also too short.
pub async fn validate_registration<'a>(
    pool: &SqlitePool,
    body: &'a CredentialsBody,
) -> AppResult<Registration<'a>> {
    let username = body.username_for_registration()?;
    check_username_free(pool, username)
        .await
        .inspect_err(|e| log_rejection("username_free", username, e))?;
    let password = check_password_length(body.password())
        .map_err(AppError::from)
        .inspect_err(|e| log_rejection("password_length", username, e))?;

    Ok(Registration { username, password })
}

/// Password length, then username exists
pub async fn validate_login<'a>(
    pool: &SqlitePool,
    body: &'a CredentialsBody,
) -> AppResult<LoginAttempt<'a>> {
    let username = body.username();
    let password = check_password_length(body.password())
        .map_err(AppError::from)
        .inspect_err(|e| log_rejection("password_length", username, e))?;
    let user = check_username_exists(pool, username)
        .await
        .inspect_err(|e| log_rejection("username_exists", username, e))?;

    Ok(LoginAttempt { user, password })
}

fn log_rejection(check: &str, username: &str, err: &AppError) {
    if let AppError::Validation(rejection) = err {
        tracing::debug!(
            check,
            username,
            status = rejection.status.as_u16(),
            "request rejected"
        );
    }
}

pub async fn check_username_free(pool: &SqlitePool, username: &str) -> AppResult<()> {
    match users::find_by_username(pool, username).await? {
        Some(_) => Err(ValidationError::username_taken().into()),
        None => Ok(()),
    }
}

pub async fn check_username_exists(pool: &SqlitePool, username: &str) -> AppResult<User> {
    users::find_by_username(pool, username)
        .await?
        .ok_or_else(|| ValidationError::invalid_credentials().into())
}

/// Absence is checked before length; length counts characters, not bytes
pub fn check_password_length(password: Option<&str>) -> Result<&str, ValidationError> {
    match password {
        Some(password) if password.chars().count() > MIN_PASSWORD_CHARS => Ok(password),
        _ => Err(ValidationError::password_too_short()),
    }
}
