//! Unverified account cleanup configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Schedule for removing accounts that never confirmed their email
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Whether the background task runs at all
    pub enabled: bool,

    /// How often the cleanup runs, in seconds
    pub interval_seconds: u64,

    /// Age after which an unverified account is removed, in seconds
    pub unverified_ttl_seconds: i64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 600,       // 10 minutes
            unverified_ttl_seconds: 600, // 10 minutes
        }
    }
}

impl CleanupConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_or("CLEANUP_ENABLED", defaults.enabled),
            interval_seconds: env_or("CLEANUP_INTERVAL_SECONDS", defaults.interval_seconds),
            unverified_ttl_seconds: env_or(
                "CLEANUP_UNVERIFIED_TTL_SECONDS",
                defaults.unverified_ttl_seconds,
            ),
        }
    }
}
