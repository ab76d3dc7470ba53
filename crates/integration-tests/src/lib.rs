//! Shared plumbing for the HTTP test suite: routers over fresh stores and
//! small request/response helpers so the tests read as scenarios.
#![cfg(feature = "web-axum")]

use std::sync::Arc;

use api_adapters::handlers::AppState;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use domains::RecordStore;
use serde_json::Value;
use services::{AuthService, ChatService, LikeService, PostService};
use storage_adapters::{demo, MemoryRecordStore};
use tower::ServiceExt;

/// Router over a fresh, empty store.
pub fn empty_app() -> Router {
    app_with(MemoryRecordStore::new())
}

/// Router over a store with the demo fixtures loaded.
pub async fn seeded_app() -> Router {
    let store = MemoryRecordStore::new();
    demo::seed(&store).await.expect("seeding a fresh store");
    app_with(store)
}

fn app_with(store: MemoryRecordStore) -> Router {
    let store: Arc<dyn RecordStore> = Arc::new(store);
    api_adapters::router(AppState {
        auth: AuthService::new(store.clone()),
        posts: PostService::new(store.clone()),
        likes: LikeService::new(store.clone()),
        chat: ChatService::new(store),
    })
}

/// Runs `request` through a clone of the app; returns status and parsed
/// JSON body (`Null` for an empty body).
pub async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("reading the response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request builder")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    json_request(Method::POST, uri, body)
}

pub fn delete_json(uri: &str, body: Value) -> Request<Body> {
    json_request(Method::DELETE, uri, body)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builder")
}
