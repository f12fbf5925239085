//! Token service module for JWT management
//!
//! Issues and verifies the HS256 tokens carried in the `Authorization`
//! header by users and admins.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
