//! # Infrastructure Layer
//!
//! Concrete implementations of the interfaces defined in `swp_core`:
//! - **Database**: MySQL repositories using SQLx, pool and schema bootstrap
//! - **Email**: verification code delivery (logging mock or HTTP mail API)
//! - **Storage**: avatar files on the local filesystem
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email delivery for verification codes
pub mod email;

/// Avatar file storage
pub mod storage;

pub use email::{create_email_service, HttpEmailService, MockEmailService};
pub use storage::LocalAvatarStorage;

#[cfg(feature = "mysql")]
pub use database::{
    ensure_schema, DatabasePool, MySqlAdminRepository, MySqlTableRepository, MySqlUserRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Email service error: {0}")]
    Email(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
