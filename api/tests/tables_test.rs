//! Integration tests for the table inventory endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::TestContext;
use swp_api::app::create_app;

fn numbers(body: &Value) -> Vec<u64> {
    body["tables"]
        .as_array()
        .expect("tables array")
        .iter()
        .map(|t| t["tableNumber"].as_u64().expect("tableNumber"))
        .collect()
}

#[actix_web::test]
async fn test_create_tables_fills_gaps_in_numbering() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    let req = test::TestRequest::post()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "quantity": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Tables created successfully");
    assert_eq!(numbers(&body), vec![1, 2, 3, 4, 5]);

    // Remove tables 2 and 4, leaving {1, 3, 5}
    for table in body["tables"].as_array().unwrap() {
        let number = table["tableNumber"].as_u64().unwrap();
        if number == 2 || number == 4 {
            let req = test::TestRequest::delete()
                .uri(&format!("/admin/tables/{}", table["id"].as_str().unwrap()))
                .insert_header(("Authorization", auth.clone()))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    let req = test::TestRequest::post()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "quantity": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(numbers(&body), vec![2, 4, 6]);

    let req = test::TestRequest::get()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(numbers(&body), vec![1, 2, 3, 4, 5, 6]);
}

#[actix_web::test]
async fn test_create_tables_rejects_bad_quantity() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    for quantity in [json!(0), json!(-1), json!("abc"), json!("3"), json!(null), json!(2.5)] {
        let req = test::TestRequest::post()
            .uri("/admin/tables")
            .insert_header(("Authorization", auth.clone()))
            .set_json(json!({ "quantity": quantity }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "quantity {}", quantity);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Quantity is required and must be a positive number"
        );
    }

    // Rejected before reaching the store
    assert_eq!(ctx.tables.call_count(), 0);
}

#[actix_web::test]
async fn test_create_tables_accepts_whole_and_large_quantities() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    let req = test::TestRequest::post()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "quantity": 2.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(numbers(&body), vec![1, 2]);

    let req = test::TestRequest::post()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "quantity": 1001 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let created = numbers(&body);
    assert_eq!(created.len(), 1001);
    assert_eq!(created[0], 3);
    assert_eq!(created[1000], 1003);
}

#[actix_web::test]
async fn test_create_tables_store_failure_is_server_error() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;
    ctx.tables.set_fail_writes(true);

    let req = test::TestRequest::post()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "quantity": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Error creating tables");
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_update_table_keeps_empty_fields() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    let req = test::TestRequest::post()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "quantity": 1 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["tables"][0]["id"].as_str().unwrap().to_string();
    let created_at = body["tables"][0]["dateTime"].clone();

    let req = test::TestRequest::put()
        .uri(&format!("/admin/tables/{}", id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "customerName": "Lan", "numberOfPeople": 4, "dateTime": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Table updated successfully");
    assert_eq!(body["table"]["customerName"], "Lan");
    assert_eq!(body["table"]["numberOfPeople"], 4);
    assert_eq!(body["table"]["dateTime"], created_at);

    let req = test::TestRequest::put()
        .uri(&format!("/admin/tables/{}", id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({
            "customerName": "",
            "numberOfPeople": 0,
            "dateTime": null,
            "note": "Window seat"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["table"]["customerName"], "Lan");
    assert_eq!(body["table"]["numberOfPeople"], 4);
    assert_eq!(body["table"]["dateTime"], created_at);
    assert_eq!(body["table"]["note"], "Window seat");

    let req = test::TestRequest::put()
        .uri(&format!("/admin/tables/{}", id))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "dateTime": "2025-03-08T19:30:00Z" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["table"]["dateTime"], "2025-03-08T19:30:00Z");
    assert_eq!(body["table"]["customerName"], "Lan");
}

#[actix_web::test]
async fn test_missing_tables_are_not_found() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let auth = ctx.admin_bearer().await;

    let req = test::TestRequest::get()
        .uri("/admin/tables")
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let unknown = uuid::Uuid::new_v4();
    for uri in [
        format!("/admin/tables/{}", unknown),
        "/admin/tables/not-a-uuid".to_string(),
    ] {
        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("Authorization", auth.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Table not found");
    }
}

#[actix_web::test]
async fn test_table_routes_require_admin_role() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/admin/tables").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let user_token = ctx.token_for(swp_core::Role::User);
    let req = test::TestRequest::post()
        .uri("/admin/tables")
        .insert_header(("Authorization", common::bearer(&user_token)))
        .set_json(json!({ "quantity": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Access denied. Admins only");
}
