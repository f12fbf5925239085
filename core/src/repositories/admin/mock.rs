//! Mock implementation of AdminRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Admin;
use crate::errors::DomainError;

use super::trait_::AdminRepository;

/// Mock admin repository for testing
pub struct MockAdminRepository {
    admins: Arc<RwLock<HashMap<Uuid, Admin>>>,
}

impl MockAdminRepository {
    pub fn new() -> Self {
        Self {
            admins: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.admins.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.admins.read().await.is_empty()
    }
}

impl Default for MockAdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminRepository for MockAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        let admins = self.admins.read().await;
        Ok(admins.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, DomainError> {
        let admins = self.admins.read().await;
        Ok(admins.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Admin>, DomainError> {
        let admins = self.admins.read().await;
        let mut all: Vec<Admin> = admins.values().cloned().collect();
        all.sort_by_key(|a| a.created_at);
        Ok(all)
    }

    async fn create(&self, admin: Admin) -> Result<Admin, DomainError> {
        let mut admins = self.admins.write().await;

        if admins.values().any(|a| a.email == admin.email) {
            return Err(DomainError::validation("Admin already exists"));
        }

        admins.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn update(&self, admin: Admin) -> Result<Admin, DomainError> {
        let mut admins = self.admins.write().await;

        if !admins.contains_key(&admin.id) {
            return Err(DomainError::not_found("Admin not found"));
        }

        admins.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut admins = self.admins.write().await;
        Ok(admins.remove(&id).is_some())
    }
}
