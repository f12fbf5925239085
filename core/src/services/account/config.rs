//! Account service configuration

/// Settings shared by the user and admin services
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Largest accepted avatar after decoding, in bytes
    pub max_avatar_bytes: usize,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            max_avatar_bytes: 5 * 1024 * 1024,
        }
    }
}
