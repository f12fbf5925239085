//! Integration tests for the admin endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, TestContext, ADMIN_EMAIL, ADMIN_PASSWORD, USER_EMAIL};
use swp_api::app::create_app;
use swp_core::Role;

#[actix_web::test]
async fn test_register_and_login() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/admin/register")
        .set_json(json!({
            "username": "Manager",
            "email": "Manager@Admin.com",
            "password": ADMIN_PASSWORD
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin registered successfully");
    assert_eq!(body["admin"]["email"], ADMIN_EMAIL);
    assert_eq!(body["admin"]["role"], "admin");
    assert!(body["admin"].get("passwordHash").is_none());

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["role"], "admin");
    assert!(body["token"].is_string());

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": "wrongpass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_web::test]
async fn test_register_rejects_bad_input() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    ctx.admin_bearer().await;

    let cases = [
        (json!({ "username": "Chef" }), "Missing required fields"),
        (
            json!({ "username": "Chef", "email": "chef@gmail.com", "password": "chefpass" }),
            "Email must end with @admin.com",
        ),
        (
            json!({ "username": "Other", "email": ADMIN_EMAIL, "password": "otherpass" }),
            "Admin already exists",
        ),
    ];

    for (body, message) in cases {
        let req = test::TestRequest::post()
            .uri("/admin/register")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], message);
    }
}

#[actix_web::test]
async fn test_admin_routes_reject_user_tokens() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let user = bearer(&ctx.token_for(Role::User));

    for uri in ["/admin", "/admin/users", "/admin/all", "/admin/profile"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", user.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{}", uri);
    }

    let req = test::TestRequest::get().uri("/admin").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_account_listings() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["admins"].as_array().unwrap().len(), 1);

    // No customers yet
    let req = test::TestRequest::get()
        .uri("/admin/users")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No users found");

    ctx.user_bearer().await;

    let req = test::TestRequest::get()
        .uri("/admin/all")
        .insert_header(("Authorization", auth))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["admins"].as_array().unwrap().len(), 1);
    assert_eq!(body["users"][0]["email"], USER_EMAIL);
}

#[actix_web::test]
async fn test_upgrade_and_delete_user() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;
    ctx.user_bearer().await;

    let user_id = ctx
        .state
        .admin_service
        .list_users()
        .await
        .unwrap()[0]
        .id;

    let req = test::TestRequest::put()
        .uri(&format!("/admin/updateRole/{}", user_id))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User upgraded to admin successfully");
    assert_eq!(body["user"]["role"], "admin");

    let req = test::TestRequest::put()
        .uri(&format!("/admin/updateRole/{}", user_id))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User is already an admin");

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/users/{}", user_id))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/users/{}", user_id))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_profile_update_and_password_change() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    let req = test::TestRequest::get()
        .uri("/admin/profile")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["email"], ADMIN_EMAIL);
    let id = profile["id"].as_str().unwrap().to_string();

    // Blank fields keep their stored values
    let req = test::TestRequest::put()
        .uri(&format!("/admin/profile/{}", id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "username": "Head Manager", "email": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin updated successfully");
    assert_eq!(body["updatedAdmin"]["username"], "Head Manager");
    assert_eq!(body["updatedAdmin"]["email"], ADMIN_EMAIL);

    let req = test::TestRequest::put()
        .uri("/admin/editPass")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "oldPassword": "nottheone", "newPassword": "newadminpass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Old password is incorrect");

    let req = test::TestRequest::put()
        .uri("/admin/editPass")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "oldPassword": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Both old and new passwords are required");

    let req = test::TestRequest::put()
        .uri("/admin/editPass")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "oldPassword": ADMIN_PASSWORD, "newPassword": "newadminpass" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/admin/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": "newadminpass" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_admin() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    let other = ctx
        .state
        .admin_service
        .register(swp_core::services::NewAdmin {
            username: "Chef".to_string(),
            email: "headchef@admin.com".to_string(),
            password: "chefpass".to_string(),
        })
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/{}", other.id))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin deleted successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/admin/{}", other.id))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin not found");
}
