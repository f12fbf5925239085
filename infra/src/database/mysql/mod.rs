//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod admin_repository_impl;
pub mod table_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use admin_repository_impl::MySqlAdminRepository;
pub use table_repository_impl::MySqlTableRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

use swp_core::errors::DomainError;

/// Map a query failure to a persistence error with context
pub(crate) fn query_failed(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::persistence(format!("{}: {}", context, e))
}

/// Whether the error is a UNIQUE constraint violation
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Read one column, reporting its name on failure
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::persistence(format!("Failed to get {}: {}", name, e)))
}

/// Ids are stored as CHAR(36)
pub(crate) fn id_column(row: &MySqlRow) -> Result<Uuid, DomainError> {
    let id: String = column(row, "id")?;
    Uuid::parse_str(&id).map_err(|e| DomainError::persistence(format!("Invalid UUID: {}", e)))
}
