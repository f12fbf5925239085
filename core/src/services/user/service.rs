//! User service implementation

use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use swp_shared::validation::{
    has_email_domain, is_valid_email, is_valid_email_name, is_valid_password,
    is_valid_phone_number, normalize_email, USER_EMAIL_DOMAIN,
};

use crate::domain::entities::{AuthToken, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::account::{
    codes_match, generate_verification_code, store_avatar, AccountServiceConfig,
    AvatarStorageTrait, EmailServiceTrait, PasswordService,
};
use crate::services::token::TokenService;

use super::types::{ProfileUpdate, SignupInput};

const EMAIL_RULES: &str =
    "Email name must be at least 6 characters long and cannot contain special characters";
const PASSWORD_RULES: &str =
    "Password must be at least 6 characters long and cannot contain special characters";
const PHONE_RULES: &str = "Phone number must be a valid Vietnamese phone number";

/// Service for customer accounts
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
    token_service: Arc<TokenService>,
    password_service: PasswordService,
    email_service: Arc<dyn EmailServiceTrait>,
    avatar_storage: Arc<dyn AvatarStorageTrait>,
    config: AccountServiceConfig,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(
        repository: Arc<U>,
        token_service: Arc<TokenService>,
        password_service: PasswordService,
        email_service: Arc<dyn EmailServiceTrait>,
        avatar_storage: Arc<dyn AvatarStorageTrait>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            repository,
            token_service,
            password_service,
            email_service,
            avatar_storage,
            config,
        }
    }

    /// Register an unverified account and email it a verification code
    ///
    /// The code is sent before the account is stored, so a delivery failure
    /// leaves nothing behind.
    pub async fn signup(&self, input: SignupInput) -> DomainResult<User> {
        if input.username.trim().is_empty() {
            return Err(DomainError::validation("Username is required"));
        }

        let email = normalize_email(&input.email);
        if !is_valid_email(&email)
            || !is_valid_email_name(&email)
            || !has_email_domain(&email, USER_EMAIL_DOMAIN)
        {
            return Err(DomainError::validation(EMAIL_RULES));
        }

        if !is_valid_password(&input.password) {
            return Err(DomainError::validation(PASSWORD_RULES));
        }

        let phone_number = non_blank(input.phone_number);
        if let Some(phone) = &phone_number {
            if !is_valid_phone_number(phone) {
                return Err(DomainError::validation(PHONE_RULES));
            }
        }

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(DomainError::validation("Email is already registered"));
        }

        let password_hash = self.password_service.hash(&input.password).await?;
        let code = generate_verification_code();
        self.send_code(&email, &code).await?;

        let mut user = User::new(input.username, email, password_hash, code);
        user.phone_number = phone_number;
        user.address = non_blank(input.address);

        let user = self.repository.create(user).await?;
        info!(user_id = %user.id, "User signed up, awaiting verification");
        Ok(user)
    }

    /// Confirm a pending verification code
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<()> {
        let mut user = self.find_by_email_or_reject(email).await?;

        let matches = user
            .verification_code
            .as_deref()
            .map(|stored| codes_match(stored, code))
            .unwrap_or(false);
        if !matches {
            return Err(DomainError::validation("Invalid verification code"));
        }

        user.verify();
        self.repository.update(user).await?;
        info!(email = %normalize_email(email), "Email verified");
        Ok(())
    }

    /// Check credentials and issue a token carrying the account's role
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthToken> {
        if email.trim().is_empty() {
            return Err(DomainError::validation("Email is required"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }

        let user = self.find_by_email_or_reject(email).await?;

        if user.has_pending_code() {
            return Err(DomainError::validation("Account is not verified"));
        }

        if !self
            .password_service
            .verify(password, &user.password_hash)
            .await?
        {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(DomainError::validation("Invalid credentials"));
        }

        let token = self.token_service.issue(user.id, user.role)?;
        info!(user_id = %user.id, "User logged in");
        Ok(AuthToken {
            token,
            user_id: user.id,
            role: user.role,
        })
    }

    /// Store and email a fresh code for the password reset flow
    pub async fn send_forgot_password_code(&self, email: &str) -> DomainResult<()> {
        let mut user = self.find_by_email_or_reject(email).await?;

        let code = generate_verification_code();
        user.set_verification_code(code.clone());
        let user = self.repository.update(user).await?;

        self.send_code(&user.email, &code).await
    }

    /// Set a new password once the reset code has been confirmed
    pub async fn reset_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        if !is_valid_password(new_password) {
            return Err(DomainError::validation(PASSWORD_RULES));
        }

        let mut user = self
            .repository
            .find_by_email(&normalize_email(email))
            .await?
            .filter(|user| !user.has_pending_code())
            .ok_or_else(|| {
                DomainError::validation("User not found or verification incomplete")
            })?;

        let hash = self.password_service.hash(new_password).await?;
        user.set_password_hash(hash);
        self.repository.update(user).await?;

        info!(email = %normalize_email(email), "Password reset");
        Ok(())
    }

    /// Change the password of a logged-in user
    pub async fn edit_password(
        &self,
        user_id: Uuid,
        password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if password.is_empty() {
            return Err(DomainError::validation("Password is empty or invalid"));
        }
        if new_password.is_empty() {
            return Err(DomainError::validation("New password is empty or invalid"));
        }
        if !is_valid_password(new_password) {
            return Err(DomainError::validation(PASSWORD_RULES));
        }

        let mut user = self.get_profile(user_id).await?;

        if !self
            .password_service
            .verify(password, &user.password_hash)
            .await?
        {
            return Err(DomainError::validation("Incorrect current password"));
        }

        let hash = self.password_service.hash(new_password).await?;
        user.set_password_hash(hash);
        self.repository.update(user).await?;

        info!(%user_id, "Password updated");
        Ok(())
    }

    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    /// Replace the username, phone number and address
    pub async fn edit_profile(&self, user_id: Uuid, update: ProfileUpdate) -> DomainResult<User> {
        if update.username.trim().is_empty() {
            return Err(DomainError::validation("Username is required"));
        }

        let phone_number = non_blank(update.phone_number);
        if let Some(phone) = &phone_number {
            if !is_valid_phone_number(phone) {
                return Err(DomainError::validation(PHONE_RULES));
            }
        }

        let mut user = self.get_profile(user_id).await?;
        user.username = update.username;
        user.phone_number = phone_number;
        user.address = non_blank(update.address);
        user.touch();

        self.repository.update(user).await
    }

    /// Store a new avatar and record its URL on the account
    pub async fn upload_avatar(
        &self,
        user_id: Uuid,
        content_type: &str,
        data: &str,
    ) -> DomainResult<String> {
        let mut user = self.get_profile(user_id).await?;

        let url = store_avatar(
            self.avatar_storage.as_ref(),
            user_id,
            content_type,
            data,
            self.config.max_avatar_bytes,
        )
        .await?;

        user.set_avatar(url.clone());
        self.repository.update(user).await?;

        info!(%user_id, avatar = %url, "User avatar updated");
        Ok(url)
    }

    // Unknown emails are reported as a bad request, not a missing resource
    async fn find_by_email_or_reject(&self, email: &str) -> DomainResult<User> {
        self.repository
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| DomainError::validation("User not found"))
    }

    async fn send_code(&self, email: &str, code: &str) -> DomainResult<()> {
        self.email_service
            .send_verification_code(email, code)
            .await
            .map(|message_id| {
                info!(%email, %message_id, "Verification code sent");
            })
            .map_err(|e| {
                error!(%email, "Failed to send verification code: {}", e);
                DomainError::internal("Failed to send verification email")
            })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
