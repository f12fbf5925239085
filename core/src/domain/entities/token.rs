//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// Token lifetime (1 hour)
pub const TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Account id (user or admin)
    pub user_id: String,

    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims valid for `expiry_seconds` from now
    pub fn new(account_id: Uuid, role: Role, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            user_id: account_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Parse the account id back out of the claims
    pub fn account_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.user_id).ok()
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A signed token together with the account it was issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub token: String,
    pub user_id: Uuid,
    pub role: Role,
}
