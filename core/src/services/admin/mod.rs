//! Admin account service
//!
//! Admin registration and login, admin profile management, and the
//! admin-only operations on customer accounts.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::AdminService;
pub use types::{AccountDirectory, AdminUpdate, NewAdmin};
