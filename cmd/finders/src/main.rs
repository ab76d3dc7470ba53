//! # Finders Server
//!
//! The entry point that assembles the application: configuration, logging,
//! the in-memory record store, the services on top of it, and the axum
//! router serving the JSON API.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::AppState;
use configs::AppConfig;
use domains::RecordStore;
use services::{AuthService, ChatService, LikeService, PostService};
use storage_adapters::{demo, MemoryRecordStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Configuration from the environment (plus a local .env, if any).
    let config = AppConfig::load().context("loading configuration")?;

    // 2. Logging. RUST_LOG wins when set; "info" otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // 3. Storage. Everything lives in this one process; a restart starts
    //    from the fixtures again.
    let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
    if config.seed_demo {
        demo::seed(store.as_ref()).await.context("seeding demo records")?;
    }

    // 4. Services and the shared handler state.
    let state = AppState {
        auth: AuthService::new(store.clone()),
        posts: PostService::new(store.clone()),
        likes: LikeService::new(store.clone()),
        chat: ChatService::new(store),
    };

    // 5. Serve.
    let app = api_adapters::router(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "🔎 Finders API listening");
    axum::serve(listener, app).await.context("server exited")?;

    Ok(())
}
