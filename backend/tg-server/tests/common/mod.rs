#![allow(dead_code)]

use tg_auth::{
    HashingParams, IdentityService, PasswordHasher, TokenIssuer, TokenLifetimes, TokenValidator,
};
use tg_db::MemoryCredentialStore;
use tg_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body};
use http::{Request, Response, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub const PASSWORD: &str = "Password123!";

/// Router over an in-memory store with a cheap Argon2 work factor
pub fn create_test_app() -> Router {
    let hasher = PasswordHasher::new(HashingParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap();

    let identity = IdentityService::new(
        Arc::new(MemoryCredentialStore::new()),
        Arc::new(hasher),
        Arc::new(TokenIssuer::with_hs256(TEST_SECRET)),
        Arc::new(TokenValidator::with_hs256(TEST_SECRET)),
        TokenLifetimes {
            access: Duration::from_secs(900),
            refresh: Duration::from_secs(3600),
        },
    );

    build_router(AppState::new(identity))
}

pub async fn send(app: &Router, request: Request<Body>) -> (http::StatusCode, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_with_bearer(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn register(app: &Router, email: &str) -> Value {
    let (status, body) = send(
        app,
        post_json(
            "/api/v1/auth/register",
            &json!({
                "email": email,
                "password": PASSWORD,
                "first_name": "Ada",
                "last_name": "Lovelace",
            }),
        ),
    )
    .await;
    assert_eq!(status, http::StatusCode::CREATED, "register failed: {}", body);
    body
}

pub async fn login(app: &Router, email: &str, password: &str) -> (http::StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/v1/auth/login",
            &json!({ "email": email, "password": password }),
        ),
    )
    .await
}
