//! Input and output types for the admin service

use serde::Serialize;

use crate::domain::entities::{Admin, User};

/// Fields submitted when registering an admin
#[derive(Debug, Clone, Default)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Admin profile changes; blank fields keep the stored value
#[derive(Debug, Clone, Default)]
pub struct AdminUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Every account in the system
#[derive(Debug, Clone, Serialize)]
pub struct AccountDirectory {
    pub admins: Vec<Admin>,
    pub users: Vec<User>,
}
