//! # SWP Core
//!
//! Core business logic and domain layer for the SWP restaurant backend.
//! This crate contains domain entities, business services, repository
//! interfaces with in-memory implementations, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Admin, AuthToken, Claims, Role, Table, TablePatch, User};
pub use errors::{DomainError, DomainResult};
pub use repositories::{
    AdminRepository, MockAdminRepository, MockTableRepository, MockUserRepository,
    TableRepository, UserRepository,
};
pub use services::{
    AccountCleanupService, AdminService, AvatarStorageTrait, EmailServiceTrait, TableService,
    TokenService, UserService,
};
