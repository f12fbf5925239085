//! Verification email delivery configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Which email backend sends verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Log codes instead of sending them
    #[default]
    Mock,
    /// POST messages to an HTTP mail API
    Http,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" | "log" => Ok(MailProvider::Mock),
            "http" | "api" => Ok(MailProvider::Http),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Backend used to deliver messages
    pub provider: MailProvider,

    /// HTTP endpoint of the mail API
    #[serde(default)]
    pub api_url: String,

    /// Bearer key for the mail API
    #[serde(default)]
    pub api_key: String,

    /// Sender address
    pub from_address: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Retries after the first failed attempt
    pub max_retries: u32,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            api_url: String::new(),
            api_key: String::new(),
            from_address: String::from("no-reply@swp-restaurant.local"),
            timeout_seconds: 10,
            max_retries: 2,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("MAIL_PROVIDER", defaults.provider),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM").unwrap_or(defaults.from_address),
            timeout_seconds: env_or("MAIL_TIMEOUT_SECONDS", defaults.timeout_seconds),
            max_retries: env_or("MAIL_MAX_RETRIES", defaults.max_retries),
        }
    }

    /// Whether the HTTP provider has everything it needs
    pub fn is_http_configured(&self) -> bool {
        !self.api_url.is_empty() && !self.api_key.is_empty()
    }
}
