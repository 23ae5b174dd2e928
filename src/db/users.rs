use crate::db::models::User;
use crate::error::{AppError, AppResult, ValidationError};
use sqlx::SqlitePool;

pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> AppResult<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password)
         VALUES (?, ?)
         RETURNING id, username, password",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        // Lost a race with a concurrent registration of the same name
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Validation(ValidationError::username_taken())
        }
        _ => AppError::Database(e),
    })?;

    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> AppResult<Option<User>> {
    let user =
        sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> AppResult<User> {
    let user = sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                AppError::NotFound(format!("User with id '{}' not found", user_id))
            }
            _ => AppError::Database(e),
        })?;

    Ok(user)
}
