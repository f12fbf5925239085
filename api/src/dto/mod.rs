//! Request and response bodies

pub mod admin;
pub mod avatar;
pub mod table;
pub mod user;

use validator::ValidationErrors;

/// First message of a failed validation, for the `{ message }` body
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data".to_string())
}
