//! Demo fixtures: one ready-made account and two listings, so a fresh
//! in-memory store has something on the feed and a login that works out of
//! the box (`demo@example.com` / `demo123`).

use chrono::{Duration, NaiveDate, Utc};
use domains::models::{Post, PostKind, User};
use domains::{RecordStore, Result};
use tracing::info;

/// The account every walkthrough logs in with.
pub fn demo_user() -> User {
    User {
        id: "demo-user".into(),
        email: "demo@example.com".into(),
        password: "demo123".into(),
        name: "Demo User".into(),
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=demo".into(),
        bio: None,
        joined_date: Utc::now() - Duration::days(30),
    }
}

/// Two listings with pre-baked engagement so the feed is not a blank page.
/// The like counts are intentionally larger than the `liked_by` sets; the
/// store tolerates that skew and never lets an unlike push a count negative.
pub fn demo_posts() -> Vec<Post> {
    vec![
        Post {
            id: "p1".into(),
            kind: PostKind::Lost,
            title: "Lost Black Wallet - Downtown Area".into(),
            description: "I lost my black leather wallet with important documents. \
                          If you find it, please contact me."
                .into(),
            image: Some("/black-wallet-lost-downtown.jpg".into()),
            location: "Downtown District".into(),
            date: day(2024, 11, 4),
            author_id: "demo-user".into(),
            likes: 24,
            liked_by: vec![],
            comments: 8,
            created_at: Utc::now(),
        },
        Post {
            id: "p2".into(),
            kind: PostKind::Found,
            title: "Found Golden Retriever - Blue Collar".into(),
            description: "Found this beautiful golden retriever near the park. \
                          Has a blue collar but no tags."
                .into(),
            image: Some("/golden-retriever-dog-found-park.jpg".into()),
            location: "Central Park".into(),
            date: day(2024, 11, 3),
            author_id: "demo-user".into(),
            likes: 156,
            liked_by: vec![],
            comments: 32,
            created_at: Utc::now(),
        },
    ]
}

/// Loads the fixtures into `store`. Meant for an empty store at startup;
/// reseeding an already-seeded store fails on the duplicate demo account.
pub async fn seed(store: &dyn RecordStore) -> Result<()> {
    store.create_user(demo_user()).await?;
    for post in demo_posts() {
        store.create_post(post).await?;
    }
    info!("demo fixtures loaded");
    Ok(())
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
