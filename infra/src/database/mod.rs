//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Schema bootstrap
//! - Repository implementations for tables, users and admins

pub mod connection;
pub mod mysql;
pub mod schema;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlAdminRepository, MySqlTableRepository, MySqlUserRepository};
pub use schema::ensure_schema;
