//! Shared harness for the HTTP-level integration tests.
//!
//! Builds the real application router (production middleware stack) on top
//! of an `#[sqlx::test]`-provided pool and drives it with `oneshot`
//! requests. Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use harborline_api::auth::jwt::JwtConfig;
use harborline_api::config::ServerConfig;
use harborline_api::router::build_app_router;
use harborline_api::state::AppState;

/// Build a test `ServerConfig` with a fixed JWT secret and dev defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request must build"),
        None => builder.body(Body::empty()).expect("request must build"),
    };
    app.oneshot(request).await.expect("request must not fail")
}

pub async fn get(app: Router, path: &str) -> Response {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    send(app, Method::GET, path, Some(token), None).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, path, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, path, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, path, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PATCH, path, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response {
    send(app, Method::DELETE, path, Some(token), None).await
}

/// Deserialize a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}

/// Register an account via the API and return its access token.
pub async fn register_token(app: Router, email: &str) -> String {
    let body = serde_json::json!({
        "email": email,
        "firstName": "Test",
        "lastName": "Sailor",
        "password": "harbor-pass-123",
    });
    let response = post_json(app, "/register/", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["access"].as_str().expect("access token").to_string()
}

/// Register, promote to superuser, and log back in as an admin.
///
/// Returns the admin access token.
pub async fn admin_token(app: Router, pool: &PgPool, email: &str) -> String {
    register_token(app.clone(), email).await;

    let user = harborline_db::repositories::UserRepo::find_by_email(pool, email)
        .await
        .expect("lookup must succeed")
        .expect("user must exist");
    harborline_db::repositories::UserRepo::set_superuser(pool, user.id, true)
        .await
        .expect("promotion must succeed")
        .expect("user must exist");

    let response = post_json(
        app,
        "/login/",
        serde_json::json!({ "email": email, "password": "harbor-pass-123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["role"], "admin");
    json["access"].as_str().expect("access token").to_string()
}
