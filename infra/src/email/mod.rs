//! Email Service Module
//!
//! Implementations of `EmailServiceTrait` used to deliver verification codes:
//! - **Mock**: logs the message, used in development and tests
//! - **HTTP**: posts the message to a transactional mail API

use std::sync::Arc;

use swp_core::services::EmailServiceTrait;
use swp_shared::config::{MailConfig, MailProvider};

pub mod http_email;
pub mod mock_email;

pub use http_email::HttpEmailService;
pub use mock_email::MockEmailService;

/// Subject line of verification mails
pub const VERIFICATION_SUBJECT: &str = "Your verification code";

/// Body of the verification mail
pub fn verification_message(code: &str) -> String {
    format!(
        "Your verification code is: {}. Enter it to confirm your email address.",
        code
    )
}

/// Mask an address for logging, keeping the first character and the domain
///
/// ```ignore
/// assert_eq!(mask_email("diner01@gmail.com"), "d******@gmail.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) => format!("{}{}@{}", first, "*".repeat(chars.count()), domain),
                None => format!("@{}", domain),
            }
        }
        None => "*".repeat(email.len()),
    }
}

/// Create an email service based on configuration
///
/// Falls back to the mock sender when the HTTP provider is selected but not
/// fully configured.
pub fn create_email_service(config: &MailConfig) -> Arc<dyn EmailServiceTrait> {
    match config.provider {
        MailProvider::Mock => Arc::new(MockEmailService::new()),
        MailProvider::Http => match HttpEmailService::new(config.clone()) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP email service: {}", e);
                tracing::warn!("Falling back to mock email service");
                Arc::new(MockEmailService::new())
            }
        },
    }
}
