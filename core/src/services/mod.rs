//! Business services containing domain logic and use cases.

pub mod account;
pub mod admin;
pub mod cleanup;
pub mod table;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use account::{
    AccountServiceConfig, AvatarStorageTrait, EmailServiceTrait, PasswordService,
};
pub use admin::{AccountDirectory, AdminService, AdminUpdate, NewAdmin};
pub use cleanup::{AccountCleanupConfig, AccountCleanupService, CleanupResult};
pub use table::{allocate, parse_quantity, TableService};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{ProfileUpdate, SignupInput, UserService};
