//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts JWT tokens from the Authorization header,
//! verifies them with the `TokenService` registered as app data, and injects
//! the caller's `AuthContext` into the request. Admin-only scopes also check
//! the role carried by the token.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use swp_core::domain::entities::{Claims, Role};
use swp_core::errors::DomainError;
use swp_core::services::TokenService;

use crate::handlers::{error_response, ApiError};

pub const MISSING_TOKEN: &str = "Access denied. No token provided";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const ADMINS_ONLY: &str = "Access denied. Admins only";

/// Authenticated caller injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Account id from the token (user or admin)
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .account_id()
            .ok_or_else(|| DomainError::unauthorized(INVALID_TOKEN))?;
        Ok(Self {
            user_id,
            role: claims.role,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth {
    /// Role the token must carry, if any
    required_role: Option<Role>,
}

impl JwtAuth {
    /// Any valid token is accepted
    pub fn new() -> Self {
        Self::default()
    }

    /// Only tokens carrying the admin role are accepted
    pub fn admin() -> Self {
        Self {
            required_role: Some(Role::Admin),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required_role = self.required_role;

        Box::pin(async move {
            match authenticate(&req, required_role) {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                // Rejections are answered here so they render like handler errors
                Err(error) => {
                    let response = error_response(&error, "Internal server error");
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Verify the bearer token of a request and check its role
fn authenticate(req: &ServiceRequest, required_role: Option<Role>) -> Result<AuthContext, DomainError> {
    let token = extract_bearer_token(req).ok_or_else(|| DomainError::unauthorized(MISSING_TOKEN))?;

    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| DomainError::internal("Token verification is not configured"))?;

    let claims = token_service.verify(&token)?;
    let context = AuthContext::from_claims(&claims)?;

    if let Some(role) = required_role {
        if context.role != role {
            tracing::warn!(user_id = %context.user_id, role = %context.role, "Role check failed");
            return Err(DomainError::forbidden(ADMINS_ONLY));
        }
    }

    Ok(context)
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ApiError::from(DomainError::unauthorized(MISSING_TOKEN)).into());

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;

    #[test]
    fn test_extract_bearer_token() {
        let req = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);
    }

    #[test]
    fn test_context_from_claims() {
        let id = Uuid::new_v4();
        let claims = Claims::new(id, Role::Admin, 60);

        let context = AuthContext::from_claims(&claims).unwrap();
        assert_eq!(context.user_id, id);
        assert!(context.is_admin());

        let broken = Claims {
            user_id: "not-a-uuid".to_string(),
            ..claims
        };
        assert_eq!(
            AuthContext::from_claims(&broken).unwrap_err(),
            DomainError::unauthorized(INVALID_TOKEN)
        );
    }
}
