//! Admin endpoints under `/admin`
//!
//! Everything except `/register` and `/login` requires an admin token.

use actix_web::{web, HttpResponse};

use swp_core::repositories::{AdminRepository, TableRepository, UserRepository};
use swp_shared::MessageResponse;

use crate::app::AppState;
use crate::dto::admin::{
    AdminsResponse, ChangePasswordRequest, RegisterAdminRequest, RegisterAdminResponse,
    UpdateAdminRequest, UpdateAdminResponse, UpgradeUserResponse, UsersResponse,
};
use crate::dto::avatar::{AvatarResponse, AvatarUploadRequest};
use crate::dto::user::{LoginRequest, LoginResponse};
use crate::handlers::error_response;
use crate::middleware::{AuthContext, JwtAuth};

use super::{parse_id, tables, validate_body};

const ADMIN_NOT_FOUND: &str = "Admin not found";
const USER_NOT_FOUND: &str = "User not found";

/// Registers the admin routes
///
/// Literal paths and the table routes come before `/{id}` so they are not
/// captured by it.
pub fn configure<T, U, A>(cfg: &mut web::ServiceConfig)
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    cfg.route("/register", web::post().to(register::<T, U, A>))
        .route("/login", web::post().to(login::<T, U, A>))
        .service(
            web::resource("")
                .wrap(JwtAuth::admin())
                .route(web::get().to(list_admins::<T, U, A>)),
        )
        .service(
            web::resource("/users")
                .wrap(JwtAuth::admin())
                .route(web::get().to(list_users::<T, U, A>)),
        )
        .service(
            web::resource("/all")
                .wrap(JwtAuth::admin())
                .route(web::get().to(list_all::<T, U, A>)),
        )
        .service(
            web::resource("/updateRole/{id}")
                .wrap(JwtAuth::admin())
                .route(web::put().to(upgrade_user::<T, U, A>)),
        )
        .service(
            web::resource("/users/{id}")
                .wrap(JwtAuth::admin())
                .route(web::delete().to(delete_user::<T, U, A>)),
        )
        .service(
            web::resource("/profile")
                .wrap(JwtAuth::admin())
                .route(web::get().to(get_profile::<T, U, A>)),
        )
        .service(
            web::resource("/profile/{id}")
                .wrap(JwtAuth::admin())
                .route(web::put().to(update_admin::<T, U, A>)),
        )
        .service(
            web::resource("/editPass")
                .wrap(JwtAuth::admin())
                .route(web::put().to(change_password::<T, U, A>)),
        )
        .service(
            web::resource("/upload-avatar-admin")
                .wrap(JwtAuth::admin())
                .route(web::post().to(upload_avatar::<T, U, A>)),
        )
        .configure(tables::configure::<T, U, A>)
        .service(
            web::resource("/{id}")
                .wrap(JwtAuth::admin())
                .route(web::delete().to(delete_admin::<T, U, A>)),
        );
}

pub async fn register<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<RegisterAdminRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.admin_service.register(body.into_inner().into()).await {
        Ok(admin) => HttpResponse::Created().json(RegisterAdminResponse {
            message: "Admin registered successfully".to_string(),
            admin,
        }),
        Err(error) => error_response(&error, "Error registering admin"),
    }
}

/// Handler for POST /admin/login
///
/// # Response
/// - 200 `{ "message": "Login successful", "token", "role", "userId" }`
/// - 400 missing or wrong credentials
pub async fn login<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.admin_service.login(&body.email, &body.password).await {
        Ok(auth) => HttpResponse::Ok().json(LoginResponse {
            message: Some("Login successful".to_string()),
            token: auth.token,
            user_id: auth.user_id.to_string(),
            role: auth.role.to_string(),
        }),
        Err(error) => error_response(&error, "Internal server error"),
    }
}

pub async fn list_admins<T, U, A>(state: web::Data<AppState<T, U, A>>) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.admin_service.list_admins().await {
        Ok(admins) => HttpResponse::Ok().json(AdminsResponse { admins }),
        Err(error) => error_response(&error, "Error fetching admins"),
    }
}

pub async fn list_users<T, U, A>(state: web::Data<AppState<T, U, A>>) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.admin_service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(UsersResponse { users }),
        Err(error) => error_response(&error, "Error fetching users"),
    }
}

pub async fn list_all<T, U, A>(state: web::Data<AppState<T, U, A>>) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.admin_service.list_all().await {
        Ok(directory) => HttpResponse::Ok().json(directory),
        Err(error) => error_response(&error, "Error fetching admins and users"),
    }
}

pub async fn upgrade_user<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let result = match parse_id(&path, USER_NOT_FOUND) {
        Ok(id) => state.admin_service.upgrade_user(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(user) => HttpResponse::Ok().json(UpgradeUserResponse {
            message: "User upgraded to admin successfully".to_string(),
            user,
        }),
        Err(error) => error_response(&error, "Error upgrading user to admin"),
    }
}

pub async fn delete_user<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let result = match parse_id(&path, USER_NOT_FOUND) {
        Ok(id) => state.admin_service.delete_user(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")),
        Err(error) => error_response(&error, "Error deleting user"),
    }
}

pub async fn delete_admin<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let result = match parse_id(&path, ADMIN_NOT_FOUND) {
        Ok(id) => state.admin_service.delete_admin(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Admin deleted successfully")),
        Err(error) => error_response(&error, "Error deleting admin"),
    }
}

pub async fn get_profile<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    auth: AuthContext,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.admin_service.get_profile(auth.user_id).await {
        Ok(admin) => HttpResponse::Ok().json(admin),
        Err(error) => error_response(&error, "Error fetching admin profile"),
    }
}

pub async fn update_admin<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    path: web::Path<String>,
    body: web::Json<UpdateAdminRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    let result = match parse_id(&path, ADMIN_NOT_FOUND) {
        Ok(id) => {
            state
                .admin_service
                .update_admin(id, body.into_inner().into())
                .await
        }
        Err(error) => Err(error),
    };

    match result {
        Ok(updated_admin) => HttpResponse::Ok().json(UpdateAdminResponse {
            message: "Admin updated successfully".to_string(),
            updated_admin,
        }),
        Err(error) => error_response(&error, "Error updating admin"),
    }
}

pub async fn change_password<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    auth: AuthContext,
    body: web::Json<ChangePasswordRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    if let Err(error) = validate_body(&*body) {
        return error_response(&error, "Error updating password");
    }

    match state
        .admin_service
        .change_password(auth.user_id, &body.old_password, &body.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password updated successfully")),
        Err(error) => error_response(&error, "Error updating password"),
    }
}

pub async fn upload_avatar<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    auth: AuthContext,
    body: web::Json<AvatarUploadRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    if let Err(error) = validate_body(&*body) {
        return error_response(&error, "Error uploading avatar");
    }

    match state
        .admin_service
        .upload_avatar(auth.user_id, &body.content_type, &body.data)
        .await
    {
        Ok(avatar_url) => HttpResponse::Ok().json(AvatarResponse { avatar_url }),
        Err(error) => error_response(&error, "Error uploading avatar"),
    }
}
