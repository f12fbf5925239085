//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::entities::{Claims, Role};
use crate::errors::{DomainError, DomainResult};

use super::config::TokenServiceConfig;

/// Service issuing and verifying signed access tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Token lifetime in seconds
    pub fn expiry_seconds(&self) -> i64 {
        self.config.expiry_seconds
    }

    /// Sign a token for an account
    ///
    /// # Arguments
    ///
    /// * `account_id` - The user's or admin's id, stored as `userId`
    /// * `role` - Role checked by the admin-only routes
    pub fn issue(&self, account_id: Uuid, role: Role) -> DomainResult<String> {
        let claims = Claims::new(account_id, role, self.config.expiry_seconds);

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            DomainError::internal("Failed to generate token")
        })
    }

    /// Verify a token's signature and expiry and return its claims
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Token rejected: {}", e);
                DomainError::unauthorized("Invalid token")
            })
    }
}
