//! Customer account endpoints under `/users`

use actix_web::{web, HttpResponse};

use swp_core::repositories::{AdminRepository, TableRepository, UserRepository};
use swp_shared::MessageResponse;

use crate::app::AppState;
use crate::dto::avatar::{AvatarResponse, AvatarUploadRequest};
use crate::dto::user::{
    EditPasswordRequest, EditProfileRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    ResetPasswordRequest, SignupRequest, VerifyCodeRequest,
};
use crate::handlers::error_response;
use crate::middleware::{AuthContext, JwtAuth};

use super::validate_body;

pub fn configure<T, U, A>(cfg: &mut web::ServiceConfig)
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    cfg.route("/signup", web::post().to(signup::<T, U, A>))
        .route("/verify-code", web::post().to(verify_code::<T, U, A>))
        .route("/login", web::post().to(login::<T, U, A>))
        .route("/forgot-password", web::post().to(forgot_password::<T, U, A>))
        .route("/reset-password", web::post().to(reset_password::<T, U, A>))
        .route("/logout", web::post().to(logout))
        .service(
            web::resource("/profile")
                .wrap(JwtAuth::new())
                .route(web::get().to(get_profile::<T, U, A>))
                .route(web::put().to(edit_profile::<T, U, A>)),
        )
        .service(
            web::resource("/edit-password")
                .wrap(JwtAuth::new())
                .route(web::put().to(edit_password::<T, U, A>)),
        )
        .service(
            web::resource("/upload-avatar")
                .wrap(JwtAuth::new())
                .route(web::post().to(upload_avatar::<T, U, A>)),
        );
}

/// Handler for POST /users/signup
///
/// Stores an unverified account and emails it a six digit code.
///
/// # Response
/// - 201 `{ "message" }`
/// - 400 field rules, domain restrictions or duplicate email
/// - 500 when the code cannot be delivered
pub async fn signup<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<SignupRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.user_service.signup(body.into_inner().into()).await {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new(
            "User created successfully. Please check your email for the verification code.",
        )),
        Err(error) => error_response(&error, "Error creating user"),
    }
}

pub async fn verify_code<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    if let Err(error) = validate_body(&*body) {
        return error_response(&error, "Error verifying code");
    }

    match state.user_service.verify_code(&body.email, &body.code).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Email verified successfully")),
        Err(error) => error_response(&error, "Error verifying code"),
    }
}

pub async fn login<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state.user_service.login(&body.email, &body.password).await {
        Ok(auth) => HttpResponse::Ok().json(LoginResponse {
            message: None,
            token: auth.token,
            user_id: auth.user_id.to_string(),
            role: auth.role.to_string(),
        }),
        Err(error) => error_response(&error, "Error logging in"),
    }
}

pub async fn forgot_password<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    if let Err(error) = validate_body(&*body) {
        return error_response(&error, "Error sending verification code");
    }

    match state.user_service.send_forgot_password_code(&body.email).await {
        Ok(()) => {
            HttpResponse::Ok().json(MessageResponse::new("Verification code sent to your email"))
        }
        Err(error) => error_response(&error, "Error sending verification code"),
    }
}

/// Handler for POST /users/reset-password
///
/// Only succeeds once the emailed code was confirmed via `/verify-code`.
pub async fn reset_password<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    body: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state
        .user_service
        .reset_password(&body.email, &body.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password reset successfully")),
        Err(error) => error_response(&error, "Error resetting password"),
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
    match state.user_service.get_profile(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => error_response(&error, "Error fetching profile"),
    }
}

pub async fn edit_profile<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    auth: AuthContext,
    body: web::Json<EditProfileRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state
        .user_service
        .edit_profile(auth.user_id, body.into_inner().into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(error) => error_response(&error, "Error updating profile"),
    }
}

pub async fn edit_password<T, U, A>(
    state: web::Data<AppState<T, U, A>>,
    auth: AuthContext,
    body: web::Json<EditPasswordRequest>,
) -> HttpResponse
where
    T: TableRepository + 'static,
    U: UserRepository + 'static,
    A: AdminRepository + 'static,
{
    match state
        .user_service
        .edit_password(auth.user_id, &body.password, &body.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password updated successfully")),
        Err(error) => error_response(&error, "Error updating password"),
    }
}

/// Tokens are stateless, so logging out is only acknowledged
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("User logged out successfully"))
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
        .user_service
        .upload_avatar(auth.user_id, &body.content_type, &body.data)
        .await
    {
        Ok(avatar_url) => HttpResponse::Ok().json(AvatarResponse { avatar_url }),
        Err(error) => error_response(&error, "Error uploading avatar"),
    }
}
