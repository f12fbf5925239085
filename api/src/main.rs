use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use swp_api::app::{create_app, AppState};
use swp_api::config::ApiConfig;
use swp_core::services::{
    AccountCleanupConfig, AccountCleanupService, AccountServiceConfig, AdminService,
    PasswordService, TableService, TokenService, TokenServiceConfig, UserService,
};
use swp_infra::{
    create_email_service, ensure_schema, DatabasePool, LocalAvatarStorage, MySqlAdminRepository,
    MySqlTableRepository, MySqlUserRepository,
};
use swp_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter())),
        )
        .init();

    info!(environment = %config.environment, "Starting SWP restaurant backend");

    if config.auth.is_using_default_secret() {
        warn!("JWT_SECRET is not set, tokens are signed with the development secret");
    }

    let database = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to the database")?;
    ensure_schema(database.pool())
        .await
        .context("Failed to create the database schema")?;
    info!("{}", database.get_statistics());

    let table_repository = Arc::new(MySqlTableRepository::new(database.pool().clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(database.pool().clone()));
    let admin_repository = Arc::new(MySqlAdminRepository::new(database.pool().clone()));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));
    let email_service = create_email_service(&config.mail);
    let avatar_storage = Arc::new(LocalAvatarStorage::from_config(&config.upload));
    let account_config = AccountServiceConfig {
        max_avatar_bytes: config.upload.max_avatar_bytes,
    };

    let table_service = Arc::new(TableService::new(table_repository));
    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        token_service.clone(),
        PasswordService::new(config.auth.bcrypt_cost),
        email_service,
        avatar_storage.clone(),
        account_config.clone(),
    ));
    let admin_service = Arc::new(AdminService::new(
        admin_repository,
        user_repository.clone(),
        token_service.clone(),
        PasswordService::new(config.auth.bcrypt_cost),
        avatar_storage,
        account_config,
    ));

    let cleanup_service = Arc::new(AccountCleanupService::new(
        user_repository,
        AccountCleanupConfig::from(&config.cleanup),
    ));
    let cleanup_task = cleanup_service.start_background_task();

    let app_state = web::Data::new(AppState {
        table_service,
        user_service,
        admin_service,
        token_service,
        database: Some(database.clone()),
    });
    let api_config = ApiConfig::from_app_config(&config);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &api_config))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await;

    if let Some(handle) = cleanup_task {
        handle.abort();
    }
    database.close().await;
    info!("Server stopped");

    result.context("Server terminated with an error")
}
