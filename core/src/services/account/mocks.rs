//! Mock collaborators for testing the account services

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::traits::{AvatarStorageTrait, EmailServiceTrait};

/// Records the last code sent to each address
#[derive(Default)]
pub struct RecordingEmailService {
    pub sent: Mutex<HashMap<String, String>>,
    pub fail: AtomicBool,
}

impl RecordingEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let service = Self::default();
        service.fail.store(true, Ordering::SeqCst);
        service
    }

    pub fn last_code(&self, email: &str) -> Option<String> {
        self.sent.lock().unwrap().get(email).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("mail server unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(format!("msg-{}", email))
    }
}

/// Keeps stored files in memory
#[derive(Default)]
pub struct MemoryAvatarStorage {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryAvatarStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl AvatarStorageTrait for MemoryAvatarStorage {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, String> {
        self.files
            .lock()
            .unwrap()
            .insert(file_name.to_string(), bytes.to_vec());
        Ok(format!("/uploads/{}", file_name))
    }
}
