//! Avatar upload storage configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Where avatars are written and how large they may be
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Directory avatars are written to
    pub upload_dir: String,

    /// URL prefix under which stored files are served
    pub public_prefix: String,

    /// Largest accepted decoded image, in bytes
    pub max_avatar_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            upload_dir: String::from("uploads"),
            public_prefix: String::from("/uploads"),
            max_avatar_bytes: 5 * 1024 * 1024, // 5 MiB
        }
    }
}

impl UploadConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or(defaults.upload_dir),
            max_avatar_bytes: env_or("MAX_AVATAR_BYTES", defaults.max_avatar_bytes),
            ..defaults
        }
    }
}
