//! Account building blocks shared by the user and admin services
//!
//! - Password hashing (bcrypt)
//! - Verification code generation and comparison
//! - Email delivery and avatar storage interfaces

mod avatar;
mod code;
mod config;
mod password;
mod traits;

#[cfg(test)]
pub(crate) mod mocks;

pub(crate) use avatar::store_avatar;
pub use code::{codes_match, generate_verification_code, CODE_LENGTH};
pub use config::AccountServiceConfig;
pub use password::PasswordService;
pub use traits::{AvatarStorageTrait, EmailServiceTrait};
