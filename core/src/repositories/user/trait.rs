//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and keeps the domain layer independent of the
//! storage engine behind it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their (already lower-cased) email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// All users, oldest first
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Create a new user
    ///
    /// Fails with a validation error when the email is already registered.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete unverified users created before `cutoff`, returning how many
    async fn delete_unverified_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
