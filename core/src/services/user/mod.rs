//! Customer account service
//!
//! Signup with email verification, login, password reset and profile
//! management for customer accounts.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::UserService;
pub use types::{ProfileUpdate, SignupInput};
