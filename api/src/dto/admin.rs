use serde::{Deserialize, Serialize};
use validator::Validate;

use swp_core::domain::entities::{Admin, User};
use swp_core::services::{AdminUpdate, NewAdmin};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterAdminRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterAdminRequest> for NewAdmin {
    fn from(request: RegisterAdminRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateAdminRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateAdminRequest> for AdminUpdate {
    fn from(request: UpdateAdminRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Both old and new passwords are required"))]
    pub old_password: String,

    #[validate(length(min = 1, message = "Both old and new passwords are required"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterAdminResponse {
    pub message: String,
    pub admin: Admin,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminResponse {
    pub message: String,
    pub updated_admin: Admin,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminsResponse {
    pub admins: Vec<Admin>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpgradeUserResponse {
    pub message: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::first_validation_message;

    #[test]
    fn test_change_password_requires_both_fields() {
        let request = ChangePasswordRequest {
            old_password: "adminpass".to_string(),
            new_password: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors),
            "Both old and new passwords are required"
        );
    }
}
