//! Input types for the user service

/// Fields submitted when signing up
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

/// Editable profile fields
///
/// `phone_number` and `address` replace the stored values, so `None`
/// clears them.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}
