//! # api-adapters
//!
//! The web surface of Finders: wire types for the JSON API, and (behind
//! the `web-axum` feature) the axum router, handlers, and error mapping
//! that expose the services over HTTP.

pub mod dto;

#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod extract;
#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod middleware;

#[cfg(feature = "web-axum")]
pub use handlers::AppState;

/// Builds the application router with every endpoint mounted under `/api`,
/// so the binary can serve it as-is or nest it somewhere else later.
#[cfg(feature = "web-axum")]
pub fn router(state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    let api = axum::Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/signup", post(handlers::signup))
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route(
            "/posts/{id}/like",
            post(handlers::like_post).delete(handlers::unlike_post),
        )
        .route(
            "/conversations",
            get(handlers::list_conversations).post(handlers::open_conversation),
        )
        .route(
            "/conversations/{id}/messages",
            get(handlers::list_messages).post(handlers::send_message),
        )
        .with_state(state);

    axum::Router::new()
        .nest("/api", api)
        .layer(middleware::trace_policy())
        .layer(middleware::cors_policy())
}
