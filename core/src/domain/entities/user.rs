//! User entity representing a registered customer account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Avatar assigned to accounts that never uploaded one
pub const DEFAULT_AVATAR: &str = "/uploads/default-avatar.png";

/// Authorization role carried by accounts and tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// User entity representing a registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    pub username: String,

    /// Lower-cased, unique
    pub email: String,

    /// bcrypt hash, never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    pub role: Role,

    pub avatar: String,

    /// Pending six digit code, cleared once confirmed
    #[serde(skip_serializing, default)]
    pub verification_code: Option<String>,

    /// Whether the signup email was confirmed
    pub is_verified: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified user awaiting `verification_code`
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        verification_code: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            phone_number: None,
            address: None,
            role: Role::User,
            avatar: DEFAULT_AVATAR.to_string(),
            verification_code: Some(verification_code),
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a code was issued and not yet confirmed
    pub fn has_pending_code(&self) -> bool {
        self.verification_code.is_some()
    }

    /// Marks the email as confirmed and clears the pending code
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.verification_code = None;
        self.touch();
    }

    /// Stores a new pending code (password reset)
    pub fn set_verification_code(&mut self, code: String) {
        self.verification_code = Some(code);
        self.touch();
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    pub fn set_avatar(&mut self, avatar: String) {
        self.avatar = avatar;
        self.touch();
    }

    pub fn promote_to_admin(&mut self) {
        self.role = Role::Admin;
        self.touch();
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
