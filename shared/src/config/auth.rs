//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::env_or;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Token signing and password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 secret used to sign and verify tokens
    pub jwt_secret: String,

    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,

    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_SECRET.to_string(),
            token_expiry_seconds: 3600, // 1 hour
            bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_expiry_seconds: env_or("JWT_EXPIRY_SECONDS", defaults.token_expiry_seconds),
            bcrypt_cost: env_or("BCRYPT_COST", defaults.bcrypt_cost),
        }
    }

    /// Create a configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}
