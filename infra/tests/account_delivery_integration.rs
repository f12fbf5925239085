//! Integration tests wiring the infrastructure senders and storage into the
//! account services.

use std::sync::{Arc, Once};

use swp_core::services::{
    AccountServiceConfig, PasswordService, SignupInput, TokenService, TokenServiceConfig,
    UserService,
};
use swp_core::MockUserRepository;
use swp_infra::{create_email_service, LocalAvatarStorage, MockEmailService};
use swp_shared::config::MailProvider;
use swp_shared::MailConfig;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

fn scratch_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("swp-infra-it-{}", uuid::Uuid::new_v4()))
}

fn user_service(
    email: MockEmailService,
    upload_dir: std::path::PathBuf,
) -> UserService<MockUserRepository> {
    UserService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(TokenService::new(TokenServiceConfig::default())),
        PasswordService::new(4),
        Arc::new(email),
        Arc::new(LocalAvatarStorage::new(upload_dir, "/uploads")),
        AccountServiceConfig::default(),
    )
}

#[tokio::test]
async fn test_signup_code_reaches_mock_mailbox() {
    init_tracing();
    let email = MockEmailService::new();
    let service = user_service(email.clone(), scratch_dir());

    service
        .signup(SignupInput {
            username: "Diner".to_string(),
            email: "Diner01@gmail.com".to_string(),
            password: "secret1".to_string(),
            ..SignupInput::default()
        })
        .await
        .unwrap();

    assert_eq!(email.get_message_count(), 1);
    let code = email.last_code("diner01@gmail.com").unwrap();
    assert_eq!(code.len(), 6);

    service.verify_code("diner01@gmail.com", &code).await.unwrap();
    assert!(service.login("diner01@gmail.com", "secret1").await.is_ok());
}

#[tokio::test]
async fn test_avatar_written_to_upload_dir() {
    init_tracing();
    let email = MockEmailService::new();
    let dir = scratch_dir();
    let service = user_service(email.clone(), dir.clone());

    let user = service
        .signup(SignupInput {
            username: "Diner".to_string(),
            email: "diner02@gmail.com".to_string(),
            password: "secret2".to_string(),
            ..SignupInput::default()
        })
        .await
        .unwrap();

    // "GIF89a" in base64
    let url = service
        .upload_avatar(user.id, "image/gif", "R0lGODlh")
        .await
        .unwrap();

    let file_name = url.strip_prefix("/uploads/").unwrap();
    let stored = tokio::fs::read(dir.join(file_name)).await.unwrap();
    assert_eq!(stored, b"GIF89a");

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn test_unconfigured_http_provider_falls_back_to_mock() {
    init_tracing();
    let config = MailConfig {
        provider: MailProvider::Http,
        ..MailConfig::default()
    };

    let sender = create_email_service(&config);
    let message_id = sender
        .send_verification_code("diner01@gmail.com", "123456")
        .await
        .unwrap();
    assert!(message_id.starts_with("mock_"));
}

#[tokio::test]
async fn test_unreachable_mail_api_fails() {
    init_tracing();
    let config = MailConfig {
        provider: MailProvider::Http,
        api_url: "http://127.0.0.1:9/send".to_string(),
        api_key: "test-key".to_string(),
        timeout_seconds: 1,
        max_retries: 0,
        ..MailConfig::default()
    };

    let sender = create_email_service(&config);
    assert!(sender
        .send_verification_code("diner01@gmail.com", "123456")
        .await
        .is_err());
}
