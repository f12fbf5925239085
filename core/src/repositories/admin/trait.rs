//! Admin repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Admin;
use crate::errors::DomainError;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, DomainError>;

    /// All admins, oldest first
    async fn find_all(&self) -> Result<Vec<Admin>, DomainError>;

    /// Fails with a validation error when the email is taken
    async fn create(&self, admin: Admin) -> Result<Admin, DomainError>;

    async fn update(&self, admin: Admin) -> Result<Admin, DomainError>;

    /// `Ok(false)` when no admin had that id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
