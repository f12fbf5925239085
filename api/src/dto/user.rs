use serde::{Deserialize, Serialize};
use validator::Validate;

use swp_core::services::{ProfileUpdate, SignupInput};

/// Missing fields deserialize as empty and are rejected by the service
/// with its own messages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(request: SignupRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
            phone_number: request.phone_number,
            address: request.address,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct VerifyCodeRequest {
    pub email: String,

    #[validate(length(equal = 6, message = "Invalid verification code"))]
    pub code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditPasswordRequest {
    pub password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditProfileRequest {
    pub username: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl From<EditProfileRequest> for ProfileUpdate {
    fn from(request: EditProfileRequest) -> Self {
        Self {
            username: request.username,
            phone_number: request.phone_number,
            address: request.address,
        }
    }
}

/// `{ token, userId, role }` returned by both login endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub token: String,
    pub user_id: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_accepts_camel_case() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "username": "Diner",
            "email": "diner01@gmail.com",
            "password": "secret1",
            "phoneNumber": "0912345678"
        }))
        .unwrap();

        let input = SignupInput::from(request);
        assert_eq!(input.phone_number.as_deref(), Some("0912345678"));
        assert!(input.address.is_none());
    }

    #[test]
    fn test_verify_code_length() {
        let request = VerifyCodeRequest {
            email: "diner01@gmail.com".to_string(),
            code: "123".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
