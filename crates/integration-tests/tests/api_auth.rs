//! Signup and login through the HTTP surface.

use axum::http::StatusCode;
use integration_tests::{call, empty_app, post_json, seeded_app};
use serde_json::json;

#[tokio::test]
async fn demo_login_returns_the_user_without_its_password() {
    let app = seeded_app().await;

    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "demo@example.com", "password": "demo123" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "demo-user");
    assert_eq!(body["user"]["name"], "Demo User");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_read_the_same() {
    let app = seeded_app().await;

    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "demo@example.com", "password": "nope" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "ghost@example.com", "password": "demo123" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn login_against_an_unseeded_store_is_unauthorized() {
    let app = empty_app();

    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "demo@example.com", "password": "demo123" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn signup_creates_an_account_that_can_log_in() {
    let app = seeded_app().await;

    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/signup",
            json!({ "email": "finder@example.com", "password": "pw", "name": "Finder" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["user"]["id"].as_str().unwrap();
    assert!(id.starts_with("user-"));
    assert!(body["user"]["avatar"]
        .as_str()
        .unwrap()
        .ends_with("seed=finder@example.com"));

    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "finder@example.com", "password": "pw" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], id);
}

#[tokio::test]
async fn reusing_an_email_is_rejected() {
    let app = seeded_app().await;

    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/signup",
            json!({ "email": "demo@example.com", "password": "other", "name": "Copycat" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn malformed_bodies_read_as_bad_request_json() {
    let app = seeded_app().await;

    // Missing password field.
    let (status, body) = call(
        &app,
        post_json("/api/auth/login", json!({ "email": "demo@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("password"));

    // Wrong type for a field.
    let (status, body) = call(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "demo@example.com", "password": 42 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
