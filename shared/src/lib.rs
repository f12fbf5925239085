//! Shared utilities and common types for the SWP restaurant server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Utility functions (email, password and phone validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CleanupConfig, CorsConfig, DatabaseConfig, Environment, MailConfig,
    ServerConfig, UploadConfig,
};
pub use types::MessageResponse;
pub use utils::validation;
