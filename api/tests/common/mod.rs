//! Shared setup for the HTTP integration tests
//!
//! Builds the full application over the in-memory repositories, the mock
//! email sender and avatar storage in a scratch directory.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use swp_api::app::AppState;
use swp_api::config::ApiConfig;
use swp_core::domain::entities::Role;
use swp_core::services::{
    AccountServiceConfig, AdminService, NewAdmin, PasswordService, SignupInput, TableService,
    TokenService, TokenServiceConfig, UserService,
};
use swp_core::{MockAdminRepository, MockTableRepository, MockUserRepository};
use swp_infra::{LocalAvatarStorage, MockEmailService};

pub type TestState = AppState<MockTableRepository, MockUserRepository, MockAdminRepository>;

pub const ADMIN_EMAIL: &str = "manager@admin.com";
pub const ADMIN_PASSWORD: &str = "adminpass";
pub const USER_EMAIL: &str = "diner01@gmail.com";
pub const USER_PASSWORD: &str = "secret1";

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub config: ApiConfig,
    pub email: MockEmailService,
    pub tables: Arc<MockTableRepository>,
    pub users: Arc<MockUserRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let upload_dir: PathBuf = std::env::temp_dir().join(format!("swp-uploads-{}", Uuid::new_v4()));
        let config = ApiConfig {
            upload_dir: upload_dir.clone(),
            ..ApiConfig::default()
        };

        let tables = Arc::new(MockTableRepository::new());
        let users = Arc::new(MockUserRepository::new());
        let admins = Arc::new(MockAdminRepository::new());

        let email = MockEmailService::new();
        let storage = Arc::new(LocalAvatarStorage::new(upload_dir, "/uploads"));
        let token_service = Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "integration-test-secret".to_string(),
            ..TokenServiceConfig::default()
        }));
        let account_config = AccountServiceConfig::default();

        let state = web::Data::new(AppState {
            table_service: Arc::new(TableService::new(tables.clone())),
            user_service: Arc::new(UserService::new(
                users.clone(),
                token_service.clone(),
                PasswordService::new(4),
                Arc::new(email.clone()),
                storage.clone(),
                account_config.clone(),
            )),
            admin_service: Arc::new(AdminService::new(
                admins,
                users.clone(),
                token_service.clone(),
                PasswordService::new(4),
                storage,
                account_config,
            )),
            token_service,
            database: None,
        });

        Self {
            state,
            config,
            email,
            tables,
            users,
        }
    }

    /// Token for an account id that may not exist in any repository
    pub fn token_for(&self, role: Role) -> String {
        self.state
            .token_service
            .issue(Uuid::new_v4(), role)
            .expect("token")
    }

    /// Register the default admin and return a bearer header value for it
    pub async fn admin_bearer(&self) -> String {
        self.state
            .admin_service
            .register(NewAdmin {
                username: "Manager".to_string(),
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            })
            .await
            .expect("register admin");

        let auth = self
            .state
            .admin_service
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("admin login");
        bearer(&auth.token)
    }

    /// Sign up, verify and log in the default customer
    pub async fn user_bearer(&self) -> String {
        let users = &self.state.user_service;
        users
            .signup(SignupInput {
                username: "Diner".to_string(),
                email: USER_EMAIL.to_string(),
                password: USER_PASSWORD.to_string(),
                ..SignupInput::default()
            })
            .await
            .expect("signup");

        let code = self.email.last_code(USER_EMAIL).expect("code was sent");
        users.verify_code(USER_EMAIL, &code).await.expect("verify");

        let auth = users.login(USER_EMAIL, USER_PASSWORD).await.expect("login");
        bearer(&auth.token)
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
