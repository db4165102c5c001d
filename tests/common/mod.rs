//! Common test utilities and helpers
//!
//! Builds the full router over an in-memory store and sends requests
//! through it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use snipnet::backend::auth::create_token;
use snipnet::backend::routes::create_router;
use snipnet::backend::server::AppState;
use snipnet::backend::snippets::InMemorySnippetStore;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router over a fresh in-memory store
pub fn test_app() -> Router {
    let state = AppState::new(Arc::new(InMemorySnippetStore::new()), TEST_SECRET);
    create_router(state)
}

/// Bearer token for `user_id`, valid for an hour
pub fn token_for(user_id: &str) -> String {
    create_token(user_id, TEST_SECRET, Duration::from_secs(3600)).expect("Failed to create token")
}

/// Status and parsed JSON body (Null when the body is empty)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user_id: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(user_id)));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    };

    TestResponse { status, body }
}

/// Create a snippet as `user_id` and return the stored record
pub async fn create_snippet(app: &Router, user_id: &str, title: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/api/snippets",
        Some(user_id),
        Some(serde_json::json!({
            "title": title,
            "description": "d",
            "code": "c",
        })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["data"].clone()
}
