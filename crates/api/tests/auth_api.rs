//! Integration tests for login and the admin gate.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, create_user, send_json, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

use filmgrain_core::roles::{ROLE_ADMIN, ROLE_VIEWER};

// ---------------------------------------------------------------------------
// Test: valid credentials yield a working admin token
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_token_usable_on_admin_routes(pool: PgPool) {
    create_user(&pool, "curator", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/auth/login",
        None,
        json!({ "username": "curator", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["expires_in"].as_i64().unwrap() > 0);
    assert_eq!(json["user"]["username"], "curator");
    assert_eq!(json["user"]["role"], "admin");
    assert!(
        json["user"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );

    // The token opens an admin-only route.
    let token = json["access_token"].as_str().unwrap().to_string();
    let reconcile = send_json(
        app,
        Method::POST,
        "/api/v1/admin/reconcile-frame-counts",
        Some(&token),
        json!({}),
    )
    .await;
    assert_eq!(reconcile.status(), StatusCode::OK);
    let reconcile = body_json(reconcile).await;
    assert_eq!(reconcile["data"]["corrected_films"], 0);
}

// ---------------------------------------------------------------------------
// Test: bad credentials are rejected uniformly
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_is_unauthorized(pool: PgPool) {
    create_user(&pool, "curator", ROLE_ADMIN).await;
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        json!({ "username": "curator", "password": "not-the-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_user_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        json!({ "username": "nobody", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: a viewer token does not open admin routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn viewer_login_cannot_reconcile(pool: PgPool) {
    create_user(&pool, "watcher", ROLE_VIEWER).await;
    let app = common::build_test_app(pool);

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/auth/login",
        None,
        json!({ "username": "watcher", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let reconcile = send_json(
        app,
        Method::POST,
        "/api/v1/admin/reconcile-frame-counts",
        Some(&token),
        json!({}),
    )
    .await;
    assert_eq!(reconcile.status(), StatusCode::FORBIDDEN);
}
