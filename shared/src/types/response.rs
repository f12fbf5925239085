//! API response types

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body used by most endpoints, with an optional
/// `error` detail on server failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,

    /// Underlying failure detail (server errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    /// Create a plain message response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Create a response carrying an error detail
    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "degraded"
    pub status: String,

    /// Whether the database answered a ping
    pub database: bool,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    pub fn new(database: bool) -> Self {
        Self {
            status: if database { "ok" } else { "degraded" }.to_string(),
            database,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
