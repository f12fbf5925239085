//! Traits for email delivery and avatar storage integration

use async_trait::async_trait;

/// Trait for email service integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code to an address, returning a message id
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}

/// Trait for avatar file storage
#[async_trait]
pub trait AvatarStorageTrait: Send + Sync {
    /// Store the bytes under `file_name`, returning the public URL
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, String>;
}
