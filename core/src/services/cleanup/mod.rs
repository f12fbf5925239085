//! Background removal of accounts that never confirmed their email

mod service;

pub use service::{AccountCleanupConfig, AccountCleanupService, CleanupResult};
