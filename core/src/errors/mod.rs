//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Each variant carries the message shown to API clients; the HTTP layer
/// only decides the status code from the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bad input, rejected before touching persistence
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Missing or invalid credentials
    #[error("{message}")]
    Unauthorized { message: String },

    /// Authenticated, but lacking the required role
    #[error("{message}")]
    Forbidden { message: String },

    /// The store rejected or failed a read/write
    #[error("{message}")]
    Persistence { message: String },

    /// Hashing, signing, mail delivery or file storage failed
    #[error("{message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error is caused by the server rather than the request
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Persistence { .. } | Self::Internal { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
