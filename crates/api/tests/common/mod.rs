//! Shared helpers for API integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! production (CORS, request ID, timeout, tracing, panic recovery) and
//! provides request/response helpers plus admin fixtures.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use filmgrain_api::auth::jwt::{generate_access_token, JwtConfig};
use filmgrain_api::auth::password::hash_password;
use filmgrain_api::config::ServerConfig;
use filmgrain_api::routes;
use filmgrain_api::state::AppState;
use filmgrain_core::roles::{ROLE_ADMIN, ROLE_VIEWER};
use filmgrain_core::visibility::VisibilityToggle;
use filmgrain_db::models::user::{CreateUser, User};
use filmgrain_db::repositories::UserRepo;
use filmgrain_imagehost::{ImageHostClient, ImageHostConfig};

/// Password used for every fixture account.
pub const TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// Build a test `ServerConfig` with safe defaults and a throwaway data dir.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: tempfile::tempdir().expect("tempdir").keep(),
        jwt: test_jwt_config(),
    }
}

/// JWT config with a known secret so tests can mint their own tokens.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Image host config pointing at a sinkhole address; tests never upload.
fn test_image_host_config() -> ImageHostConfig {
    ImageHostConfig {
        upload_url: "http://127.0.0.1:9/image/upload".to_string(),
        upload_preset: "test_preset".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let visibility = Arc::new(VisibilityToggle::load(&config.data_dir));

    let state = AppState {
        pool,
        config: Arc::new(config),
        image_host: Arc::new(ImageHostClient::new(test_image_host_config())),
        visibility,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user with [`TEST_PASSWORD`] and the given role.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Create an admin account and mint a valid bearer token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    let admin = create_user(pool, "admin", ROLE_ADMIN).await;
    generate_access_token(admin.id, ROLE_ADMIN, &test_jwt_config())
        .expect("token generation should succeed")
}

/// Create a viewer account and mint a valid bearer token for it.
pub async fn viewer_token(pool: &PgPool) -> String {
    let viewer = create_user(pool, "viewer", ROLE_VIEWER).await;
    generate_access_token(viewer.id, ROLE_VIEWER, &test_jwt_config())
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// GET a path with no auth.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// Send a JSON body with the given method, optionally authenticated.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).expect("request");
    app.oneshot(request).await.expect("response")
}

/// DELETE a path, optionally authenticated.
pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).expect("request");
    app.oneshot(request).await.expect("response")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
