//! Mock Email Service Implementation
//!
//! Logs verification mails instead of sending them and remembers the last
//! code per address so tests can complete the verification flow.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

use swp_core::services::EmailServiceTrait;

use super::mask_email;

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last code sent to each address
    codes: Arc<RwLock<HashMap<String, String>>>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Last code sent to `email`, if any
    pub fn last_code(&self, email: &str) -> Option<String> {
        self.codes
            .read()
            .ok()
            .and_then(|codes| codes.get(email).cloned())
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let masked = mask_email(email);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(email = %masked, "Mock email service simulating failure");
            return Err("Simulated email sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut codes) = self.codes.write() {
            codes.insert(email.to_string(), code.to_string());
        }

        info!(
            target: "email_service",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            count,
            "Verification email sent (mock)"
        );

        Ok(message_id)
    }
}
