//! Repository interfaces and in-memory implementations.

pub mod admin;
pub mod table;
pub mod user;

pub use admin::{AdminRepository, MockAdminRepository};
pub use table::{MockTableRepository, TableRepository};
pub use user::{MockUserRepository, UserRepository};
