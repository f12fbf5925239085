//! Application state and factory
//!
//! This module holds the services shared by every worker and builds the
//! Actix-web application around them.

use std::path::Path;
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::ContentType;
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use swp_core::domain::entities::ALLOWED_AVATAR_TYPES;
use swp_core::repositories::{AdminRepository, TableRepository, UserRepository};
use swp_core::services::{AdminService, TableService, TokenService, UserService};
use swp_infra::DatabasePool;
use swp_shared::types::HealthResponse;
use swp_shared::MessageResponse;

use crate::config::ApiConfig;
use crate::handlers::json_error_handler;
use crate::middleware::create_cors;
use crate::routes;

/// Services shared by all request handlers
pub struct AppState<T, U, A>
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    pub table_service: Arc<TableService<T>>,
    pub user_service: Arc<UserService<U>>,
    pub admin_service: Arc<AdminService<A, U>>,
    pub token_service: Arc<TokenService>,
    /// Absent when running against in-memory repositories
    pub database: Option<DatabasePool>,
}

/// Create and configure the application with all dependencies
pub fn create_app<T, U, A>(
    app_state: web::Data<AppState<T, U, A>>,
    config: &ApiConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let token_service = web::Data::from(app_state.token_service.clone());
    let json_config = web::JsonConfig::default()
        .limit(config.json_limit)
        .error_handler(json_error_handler);
    let uploads_path = format!("{}/{{filename}}", config.upload_prefix);

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .app_data(json_config)
        .app_data(web::Data::new(config.clone()))
        // Request spans first, then CORS
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check::<T, U, A>))
        .route(&uploads_path, web::get().to(serve_upload))
        .service(web::scope("/users").configure(routes::users::configure::<T, U, A>))
        .service(web::scope("/admin").configure(routes::admin::configure::<T, U, A>))
        .default_service(web::route().to(not_found))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Backend is running")
}

/// Health check endpoint handler
async fn health_check<T, U, A>(state: web::Data<AppState<T, U, A>>) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let database = match &state.database {
        Some(pool) => pool.health_check().await.unwrap_or(false),
        None => false,
    };

    HttpResponse::Ok().json(HealthResponse::new(database))
}

/// Serves stored avatars from the upload directory
async fn serve_upload(config: web::Data<ApiConfig>, path: web::Path<String>) -> HttpResponse {
    let filename = path.into_inner();
    if filename.starts_with('.') || filename.contains(['/', '\\']) {
        return not_found().await;
    }

    let extension = Path::new(&filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let content_type = ALLOWED_AVATAR_TYPES
        .iter()
        .find(|(_, ext)| Some(*ext) == extension.as_deref())
        .map(|(mime, _)| *mime)
        .unwrap_or("application/octet-stream");

    match tokio::fs::read(config.upload_dir.join(&filename)).await {
        Ok(bytes) => HttpResponse::Ok().content_type(content_type).body(bytes),
        Err(_) => not_found().await,
    }
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::new("Not found"))
}
