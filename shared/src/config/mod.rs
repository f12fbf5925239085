//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and password hashing
//! - `cleanup` - Unverified account cleanup schedule
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `mail` - Verification email delivery
//! - `server` - HTTP server and CORS configuration
//! - `storage` - Avatar upload storage

pub mod auth;
pub mod cleanup;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::AuthConfig;
pub use cleanup::CleanupConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::{MailConfig, MailProvider};
pub use server::{CorsConfig, ServerConfig};
pub use storage::UploadConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Mail delivery configuration
    pub mail: MailConfig,

    /// Avatar upload configuration
    pub upload: UploadConfig,

    /// Unverified account cleanup configuration
    pub cleanup: CleanupConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            mail: MailConfig::default(),
            upload: UploadConfig::default(),
            cleanup: CleanupConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let cors = if environment.is_production() {
            CorsConfig::from_env()
        } else {
            CorsConfig::development()
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            mail: MailConfig::from_env(),
            upload: UploadConfig::from_env(),
            cleanup: CleanupConfig::from_env(),
            cors,
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
