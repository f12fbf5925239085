//! Password hashing with bcrypt, run off the async executor.

use tracing::error;

use crate::errors::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| {
                error!("Password hashing task failed: {}", e);
                DomainError::internal("Failed to hash password")
            })?
            .map_err(|e| {
                error!("Password hashing failed: {}", e);
                DomainError::internal("Failed to hash password")
            })
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A malformed stored hash counts as a mismatch.
    pub async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| {
                error!("Password verification task failed: {}", e);
                DomainError::internal("Failed to verify password")
            })?;

        Ok(verified.unwrap_or(false))
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
