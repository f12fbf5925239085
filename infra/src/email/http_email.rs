//! HTTP Email Service Implementation
//!
//! Posts verification mails as JSON to a transactional mail API, retrying
//! server errors with a growing delay.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use swp_core::services::EmailServiceTrait;
use swp_shared::config::MailConfig;

use super::{mask_email, verification_message, VERIFICATION_SUBJECT};
use crate::InfrastructureError;

const RETRY_DELAY_MS: u64 = 500;

#[derive(Debug, Serialize)]
struct MailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

#[derive(Debug, Deserialize)]
struct MailResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Email service backed by an HTTP mail API
pub struct HttpEmailService {
    client: Client,
    config: MailConfig,
}

impl HttpEmailService {
    /// Create a new HTTP email service
    ///
    /// Fails when the API url or key is missing.
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if !config.is_http_configured() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL and MAIL_API_KEY must be set for the http mail provider".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        info!("HTTP email service initialized for {}", config.api_url);
        Ok(Self { client, config })
    }

    async fn send_once(&self, to: &str, code: &str) -> Result<String, InfrastructureError> {
        let request = MailRequest {
            from: &self.config.from_address,
            to,
            subject: VERIFICATION_SUBJECT,
            text: verification_message(code),
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: MailResponse = response.json().await.unwrap_or(MailResponse { id: None });
        Ok(body.id.unwrap_or_else(|| "accepted".to_string()))
    }

    /// Send with retry logic
    async fn send_with_retry(&self, to: &str, code: &str) -> Result<String, InfrastructureError> {
        let attempts = self.config.max_retries + 1;
        let mut delay = Duration::from_millis(RETRY_DELAY_MS);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!("Sending email attempt {}/{} to {}", attempt, attempts, mask_email(to));

            match self.send_once(to, code).await {
                Ok(id) => return Ok(id),
                Err(e) => {
                    error!("Failed to send email (attempt {}/{}): {}", attempt, attempts, e);

                    if attempt >= attempts || !is_retryable(&e) {
                        return Err(InfrastructureError::Email(format!(
                            "Failed to send email after {} attempts: {}",
                            attempt, e
                        )));
                    }

                    warn!("Retrying email delivery after {:?}", delay);
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

/// Timeouts, connection failures, rate limits and server errors are retried
fn is_retryable(error: &InfrastructureError) -> bool {
    match error {
        InfrastructureError::Http(e) => match e.status() {
            Some(status) => status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error(),
            None => e.is_timeout() || e.is_connect(),
        },
        _ => false,
    }
}

#[async_trait]
impl EmailServiceTrait for HttpEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let id = self
            .send_with_retry(email, code)
            .await
            .map_err(|e| e.to_string())?;

        info!(
            target: "email_service",
            provider = "http",
            email = %mask_email(email),
            message_id = %id,
            "Verification email sent"
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swp_shared::config::MailProvider;

    #[test]
    fn test_requires_url_and_key() {
        let config = MailConfig {
            provider: MailProvider::Http,
            api_url: "https://mail.example.com/send".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            HttpEmailService::new(config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_builds_when_configured() {
        let config = MailConfig {
            provider: MailProvider::Http,
            api_url: "https://mail.example.com/send".to_string(),
            api_key: "key".to_string(),
            ..Default::default()
        };

        assert!(HttpEmailService::new(config).is_ok());
    }

    #[test]
    fn test_non_http_errors_are_not_retried() {
        assert!(!is_retryable(&InfrastructureError::Config("x".to_string())));
    }

    #[tokio::test]
    async fn test_unreachable_api_reports_error() {
        let config = MailConfig {
            provider: MailProvider::Http,
            api_url: "http://127.0.0.1:9/send".to_string(),
            api_key: "key".to_string(),
            max_retries: 0,
            timeout_seconds: 2,
            ..Default::default()
        };
        let service = HttpEmailService::new(config).unwrap();

        let result = service
            .send_verification_code("diner01@gmail.com", "123456")
            .await;

        assert!(result.unwrap_err().contains("after 1 attempts"));
    }
}
