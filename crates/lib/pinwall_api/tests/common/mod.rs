//! Shared helpers for router-level tests: an app backed by the in-memory
//! store, and thin wrappers over `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pinwall_api::config::ApiConfig;
use pinwall_api::{AppState, router};
use pinwall_core::store::memory::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "pinwall-test-secret";

/// Password used for every test account.
pub const TEST_PASSWORD: &str = "longenough";

/// Build a router backed by a fresh in-memory store.
pub fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            jwt_secret: TEST_SECRET.into(),
        },
    };
    router(state)
}

/// Send a JSON request, returning (status, parsed body).
pub async fn send_json(
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
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON")
    };
    (status, value)
}

/// Register an account and sign in, returning (user id, session token).
pub async fn signup_and_signin(app: &Router, email: &str) -> (String, String) {
    let (status, body) = send_json(
        app,
        "POST",
        "/signup",
        None,
        Some(json!({"email": email, "password": TEST_PASSWORD, "name": "Test User"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {body}");
    let id = body["id"].as_str().expect("user id").to_string();

    let (status, body) = send_json(
        app,
        "POST",
        "/signin",
        None,
        Some(json!({"email": email, "password": TEST_PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signin failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();

    (id, token)
}
