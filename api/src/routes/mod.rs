//! Route handlers
//!
//! - `/admin/tables` table inventory (admin token)
//! - `/admin` admin accounts and account management
//! - `/users` customer accounts

pub mod admin;
pub mod tables;
pub mod users;

use uuid::Uuid;
use validator::Validate;

use swp_core::errors::DomainError;

use crate::dto::first_validation_message;

/// Path ids that are not UUIDs cannot name a stored record
pub(crate) fn parse_id(raw: &str, not_found: &'static str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::not_found(not_found))
}

pub(crate) fn validate_body<T: Validate>(body: &T) -> Result<(), DomainError> {
    body.validate()
        .map_err(|errors| DomainError::validation(first_validation_message(&errors)))
}
