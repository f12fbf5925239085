//! Admin entity, a staff account managing users and tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{Role, DEFAULT_AVATAR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: Uuid,

    pub username: String,

    /// Unique, always under the admin domain
    pub email: String,

    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub role: Role,

    pub avatar: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            role: Role::Admin,
            avatar: DEFAULT_AVATAR.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn set_avatar(&mut self, avatar: String) {
        self.avatar = avatar;
        self.updated_at = Utc::now();
    }

    /// Replace the editable profile fields
    pub fn update_profile(&mut self, username: String, email: String) {
        self.username = username;
        self.email = email;
        self.updated_at = Utc::now();
    }
}
