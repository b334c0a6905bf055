//! HTTP surface tests over the assembled router

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{TEST_PASSWORD, seed_user, test_state};
use delivery_server::core::build_app;
use delivery_server::db::repository::delivery;
use shared::models::{Role, User};
use shared::util::new_id;

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn token_for(state: &delivery_server::ServerState, user: &User) -> String {
    state.jwt_service.generate_token(user).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let state = test_state().await;
    let app = build_app(state);
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_and_login() {
    let state = test_state().await;
    let app = build_app(state);

    let payload = json!({
        "name": "Auth Test User",
        "email": "auth_test_user@example.com",
        "password": TEST_PASSWORD,
    });
    let (status, body) = send(&app, "POST", "/api/users", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "auth_test_user@example.com");
    assert_eq!(body["role"], "customer");
    assert!(body.get("password_hash").is_none(), "hash must never leak");

    // Same email again: conflict
    let (status, _) = send(&app, "POST", "/api/users", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Login with the right password
    let (status, body) = send(
        &app,
        "POST",
        "/api/sessions",
        None,
        Some(json!({"email": "auth_test_user@example.com", "password": TEST_PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["role"], "customer");

    // Wrong password and unknown email: same unified answer
    let (status, body) = send(
        &app,
        "POST",
        "/api/sessions",
        None,
        Some(json!({"email": "auth_test_user@example.com", "password": "Wrong@123"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let wrong_password_message = body["message"].clone();

    let (status, body) = send(
        &app,
        "POST",
        "/api/sessions",
        None,
        Some(json!({"email": "nobody@example.com", "password": "Wrong@123"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], wrong_password_message);
}

#[tokio::test]
async fn test_weak_passwords_rejected() {
    let state = test_state().await;
    let app = build_app(state);

    for (password, fragment) in [
        ("Gu@1", "at least 8"),
        ("gu@12345678", "uppercase"),
        ("Gu@abcdefgh", "number"),
        ("Gu123456789", "special"),
    ] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            None,
            Some(json!({"name": "User", "email": "user@example.com", "password": password})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "password {password:?}");
        assert!(
            body["message"].as_str().unwrap().contains(fragment),
            "expected {fragment:?} in {body}"
        );
    }
}

#[tokio::test]
async fn test_delivery_management_requires_operator() {
    let state = test_state().await;
    let customer = seed_user(&state, "Customer", "c@example.com", Role::Customer).await;
    let customer_token = token_for(&state, &customer);
    let app = build_app(state);

    // No token at all
    let (status, _) = send(&app, "GET", "/api/deliveries", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Customer token: authenticated but not an operator
    let (status, _) = send(&app, "GET", "/api/deliveries", Some(&customer_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "POST",
        "/api/deliveries",
        Some(&customer_token),
        Some(json!({"user_id": customer.id, "description": "laptop"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_operator_provisions_and_advances_delivery() {
    let state = test_state().await;
    let customer = seed_user(&state, "Customer", "c@example.com", Role::Customer).await;
    let operator = seed_user(&state, "Operator", "op@example.com", Role::Operator).await;
    let op_token = token_for(&state, &operator);
    let app = build_app(state);

    // Unknown owner: 404
    let (status, _) = send(
        &app,
        "POST",
        "/api/deliveries",
        Some(&op_token),
        Some(json!({"user_id": new_id(), "description": "laptop"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        "POST",
        "/api/deliveries",
        Some(&op_token),
        Some(json!({"user_id": customer.id, "description": "laptop"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    let delivery_id = body["id"].as_str().unwrap().to_string();

    // Unknown status string never reaches the lifecycle rules
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/deliveries/{delivery_id}/status"),
        Some(&op_token),
        Some(json!({"status": "in_transit"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Skipping a state is rejected
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/deliveries/{delivery_id}/status"),
        Some(&op_token),
        Some(json!({"status": "delivered"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Forward transition succeeds
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/deliveries/{delivery_id}/status"),
        Some(&op_token),
        Some(json!({"status": "processing"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "processing");

    // Regression is rejected
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/deliveries/{delivery_id}/status"),
        Some(&op_token),
        Some(json!({"status": "pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_append_log_and_view_over_http() {
    let state = test_state().await;
    let owner = seed_user(&state, "Owner", "owner@example.com", Role::Customer).await;
    let other = seed_user(&state, "Other", "other@example.com", Role::Customer).await;
    let operator = seed_user(&state, "Operator", "op@example.com", Role::Operator).await;
    let d1 = delivery::create(&state.pool, &owner.id, "laptop").await.unwrap();

    let owner_token = token_for(&state, &owner);
    let other_token = token_for(&state, &other);
    let op_token = token_for(&state, &operator);
    let app = build_app(state.clone());

    // A customer may append (not role-gated) while the delivery is pending
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/deliveries/{}/logs", d1.id),
        Some(&owner_token),
        Some(json!({"description": "picked up"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Log created successfully");

    // Append to a nonexistent delivery: loud 404
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/deliveries/{}/logs", new_id()),
        Some(&owner_token),
        Some(json!({"description": "note"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Owner view: logs in order, owner embedded, no hash anywhere
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/deliveries/{}", d1.id),
        Some(&owner_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["logs"][0]["description"], "picked up");
    assert_eq!(body["user"]["id"], owner.id);
    assert!(body["user"].get("password_hash").is_none());

    // Foreign customer: forbidden, existence not hidden beyond that
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/deliveries/{}", d1.id),
        Some(&other_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "The user can only view their own deliveries");

    // Absent delivery for an operator: 200 with a null body
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/deliveries/{}", new_id()),
        Some(&op_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    // Once processing, the append is rejected with the status named
    delivery::update_status(&state.pool, &d1.id, shared::models::DeliveryStatus::Processing)
        .await
        .unwrap();
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/deliveries/{}/logs", d1.id),
        Some(&owner_token),
        Some(json!({"description": "in transit"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("still processing"));
}
