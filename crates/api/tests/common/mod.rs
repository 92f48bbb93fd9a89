//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`,
//! no TCP listener involved. State lives in the in-memory stores, so clone
//! the returned router to issue several requests against the same state.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vizdeck_api::config::{LogFormat, ServerConfig};
use vizdeck_api::middleware::organization::ORGANIZATION_HEADER;
use vizdeck_api::router::build_app_router;
use vizdeck_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8888".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over fresh in-memory stores.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::in_memory(config.clone());
    build_app_router(state, &config)
}

/// Send a request, optionally on behalf of `org`, with an optional raw body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    org: Option<&str>,
    body: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(org) = org {
        builder = builder.header(ORGANIZATION_HEADER, org);
    }
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_as(app: Router, uri: &str, org: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(org), None).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    org: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, org, Some(body.to_string())).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, None, Some(body.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
