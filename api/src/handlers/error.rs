//! Rendering of domain errors as HTTP responses
//!
//! Client errors are answered with `{ "message" }`. Server errors answer
//! with the operation that failed as `message` and the underlying failure
//! as `error`.

use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;

use swp_core::errors::DomainError;
use swp_shared::MessageResponse;

/// Status code for each error kind
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::Persistence { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Log and render a domain error
///
/// `context` names the failed operation and is only shown for server errors.
pub fn error_response(error: &DomainError, context: &str) -> HttpResponse {
    let status = status_for(error);

    if error.is_server_error() {
        tracing::error!(%error, context, "Request failed");
        HttpResponse::build(status).json(MessageResponse::with_error(context, error.to_string()))
    } else {
        tracing::warn!(%error, status = status.as_u16(), "Request rejected");
        HttpResponse::build(status).json(MessageResponse::new(error.to_string()))
    }
}

/// Domain error usable as an actix error from middleware and extractors
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        error_response(&self.0, "Internal server error")
    }
}

/// Malformed JSON bodies answer 400 in the usual message shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected request body: {}", err);

    let response = HttpResponse::BadRequest()
        .json(MessageResponse::with_error("Invalid request body", err.to_string()));
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_client_error_renders_message_only() {
        let response = error_response(&DomainError::not_found("Table not found"), "ignored");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Table not found" })
        );
    }

    #[actix_web::test]
    async fn test_server_error_renders_context_and_detail() {
        let response = error_response(
            &DomainError::persistence("Duplicate table number 4"),
            "Error creating tables",
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "message": "Error creating tables",
                "error": "Duplicate table number 4"
            })
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DomainError::validation("x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::unauthorized("x")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_for(&DomainError::forbidden("x")), StatusCode::FORBIDDEN);
        assert_eq!(
            status_for(&DomainError::internal("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
