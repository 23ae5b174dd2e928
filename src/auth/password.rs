//! # Password Hashing
//!
//! Thin wrapper over `bcrypt`. Hashing is deliberately slow, so both operations run
//! on tokio's blocking thread pool instead of stalling the async workers.

use crate::error::{AppError, AppResult};
use tokio::task;

/// One-way password hasher with a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh random salt
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        let digest = task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))??;

        Ok(digest)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// Returns `Ok(false)` on mismatch. A digest that is not valid bcrypt output is
    /// an error, not a mismatch.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> AppResult<bool> {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        let matches = task::spawn_blocking(move || bcrypt::verify(plaintext, &digest))
            .await
            .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))??;

        Ok(matches)
    }
}
