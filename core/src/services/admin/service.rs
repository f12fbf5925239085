//! Admin service implementation

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use swp_shared::validation::{has_email_domain, normalize_email, ADMIN_EMAIL_DOMAIN};

use crate::domain::entities::{Admin, AuthToken, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AdminRepository, UserRepository};
use crate::services::account::{
    store_avatar, AccountServiceConfig, AvatarStorageTrait, PasswordService,
};
use crate::services::token::TokenService;

use super::types::{AccountDirectory, AdminUpdate, NewAdmin};

const DOMAIN_RULE: &str = "Email must end with @admin.com";

/// Service for admin accounts and admin-only account management
pub struct AdminService<A: AdminRepository, U: UserRepository> {
    admin_repository: Arc<A>,
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
    password_service: PasswordService,
    avatar_storage: Arc<dyn AvatarStorageTrait>,
    config: AccountServiceConfig,
}

impl<A: AdminRepository, U: UserRepository> AdminService<A, U> {
    pub fn new(
        admin_repository: Arc<A>,
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        password_service: PasswordService,
        avatar_storage: Arc<dyn AvatarStorageTrait>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            admin_repository,
            user_repository,
            token_service,
            password_service,
            avatar_storage,
            config,
        }
    }

    /// Register a new admin under the admin email domain
    pub async fn register(&self, input: NewAdmin) -> DomainResult<Admin> {
        if input.username.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(DomainError::validation("Missing required fields"));
        }

        let email = normalize_email(&input.email);
        if self.admin_repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::validation("Admin already exists"));
        }
        if !has_email_domain(&email, ADMIN_EMAIL_DOMAIN) {
            return Err(DomainError::validation(DOMAIN_RULE));
        }

        let hash = self.password_service.hash(&input.password).await?;
        let admin = self
            .admin_repository
            .create(Admin::new(input.username, email, hash))
            .await?;

        info!(admin_id = %admin.id, "Admin registered");
        Ok(admin)
    }

    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthToken> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("Missing email or password"));
        }

        let invalid = || DomainError::validation("Invalid email or password");

        let admin = self
            .admin_repository
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(invalid)?;

        if !self
            .password_service
            .verify(password, &admin.password_hash)
            .await?
        {
            warn!(admin_id = %admin.id, "Admin login with wrong password");
            return Err(invalid());
        }

        let token = self.token_service.issue(admin.id, admin.role)?;
        info!(admin_id = %admin.id, "Admin logged in");
        Ok(AuthToken {
            token,
            user_id: admin.id,
            role: admin.role,
        })
    }

    pub async fn list_admins(&self) -> DomainResult<Vec<Admin>> {
        let admins = self.admin_repository.find_all().await?;
        if admins.is_empty() {
            return Err(DomainError::not_found("No admins found"));
        }
        Ok(admins)
    }

    pub async fn get_profile(&self, admin_id: Uuid) -> DomainResult<Admin> {
        self.admin_repository
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Admin not found"))
    }

    /// Update an admin's username, email and optionally password
    pub async fn update_admin(&self, id: Uuid, update: AdminUpdate) -> DomainResult<Admin> {
        let email = non_blank(update.email).map(|e| normalize_email(&e));

        if let Some(email) = &email {
            if let Some(other) = self.admin_repository.find_by_email(email).await? {
                if other.id != id {
                    return Err(DomainError::validation(
                        "Email already in use by another admin",
                    ));
                }
            }
            if !has_email_domain(email, ADMIN_EMAIL_DOMAIN) {
                return Err(DomainError::validation(DOMAIN_RULE));
            }
        }

        let mut admin = self.get_profile(id).await?;
        let username = non_blank(update.username).unwrap_or_else(|| admin.username.clone());
        let email = email.unwrap_or_else(|| admin.email.clone());
        admin.update_profile(username, email);

        if let Some(password) = non_blank(update.password) {
            let hash = self.password_service.hash(&password).await?;
            admin.set_password_hash(hash);
        }

        let admin = self.admin_repository.update(admin).await?;
        info!(admin_id = %id, "Admin updated");
        Ok(admin)
    }

    pub async fn delete_admin(&self, id: Uuid) -> DomainResult<()> {
        if !self.admin_repository.delete(id).await? {
            return Err(DomainError::not_found("Admin not found"));
        }
        info!(admin_id = %id, "Admin deleted");
        Ok(())
    }

    /// Change the password of the logged-in admin
    pub async fn change_password(
        &self,
        admin_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if old_password.is_empty() || new_password.is_empty() {
            return Err(DomainError::validation(
                "Both old and new passwords are required",
            ));
        }

        let mut admin = self.get_profile(admin_id).await?;

        if !self
            .password_service
            .verify(old_password, &admin.password_hash)
            .await?
        {
            return Err(DomainError::validation("Old password is incorrect"));
        }

        let hash = self.password_service.hash(new_password).await?;
        admin.set_password_hash(hash);
        self.admin_repository.update(admin).await?;

        info!(%admin_id, "Admin password updated");
        Ok(())
    }

    pub async fn upload_avatar(
        &self,
        admin_id: Uuid,
        content_type: &str,
        data: &str,
    ) -> DomainResult<String> {
        let mut admin = self.get_profile(admin_id).await?;

        let url = store_avatar(
            self.avatar_storage.as_ref(),
            admin_id,
            content_type,
            data,
            self.config.max_avatar_bytes,
        )
        .await?;

        admin.set_avatar(url.clone());
        self.admin_repository.update(admin).await?;

        info!(%admin_id, avatar = %url, "Admin avatar updated");
        Ok(url)
    }

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        let users = self.user_repository.find_all().await?;
        if users.is_empty() {
            return Err(DomainError::not_found("No users found"));
        }
        Ok(users)
    }

    /// Admins and users together; `NotFound` only when both are empty
    pub async fn list_all(&self) -> DomainResult<AccountDirectory> {
        let admins = self.admin_repository.find_all().await?;
        let users = self.user_repository.find_all().await?;

        if admins.is_empty() && users.is_empty() {
            return Err(DomainError::not_found("No admins or users found"));
        }
        Ok(AccountDirectory { admins, users })
    }

    /// Give a customer account the admin role
    pub async fn upgrade_user(&self, user_id: Uuid) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))?;

        if user.is_admin() {
            return Err(DomainError::validation("User is already an admin"));
        }

        user.promote_to_admin();
        let user = self.user_repository.update(user).await?;

        info!(%user_id, "User upgraded to admin");
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: Uuid) -> DomainResult<()> {
        if !self.user_repository.delete(user_id).await? {
            return Err(DomainError::not_found("User not found"));
        }
        info!(%user_id, "User deleted");
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
