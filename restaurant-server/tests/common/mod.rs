//! Shared fixtures for integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use http_body_util::BodyExt;
use restaurant_server::auth::JwtConfig;
use restaurant_server::core::{Config, DatabaseConfig};
use restaurant_server::{ServerState, build_app};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

pub fn test_config() -> Config {
    Config {
        database: DatabaseConfig::in_memory(),
        jwt: JwtConfig::new(TEST_SECRET),
        http_port: 0,
        log_level: "warn".into(),
        log_json: false,
        log_dir: None,
        environment: "test".into(),
    }
}

/// Fresh state over its own in-memory datastore
pub async fn test_state() -> ServerState {
    ServerState::initialize(&test_config())
        .await
        .expect("in-memory state")
}

pub async fn test_app() -> (ServerState, Router) {
    let state = test_state().await;
    let app = build_app(state.clone());
    (state, app)
}

/// Send one request through the router; returns status and JSON body
pub async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (http::StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("token", token);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response: Response<Body> = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}
