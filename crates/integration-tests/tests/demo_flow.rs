//! One end-to-end walkthrough: the demo user and a second account go from
//! login to a thread about the lost wallet, the way the UI drives the API.

use axum::http::StatusCode;
use integration_tests::{call, delete_json, get, post_json, seeded_app};
use serde_json::json;

#[tokio::test]
async fn lost_wallet_walkthrough() {
    let app = seeded_app().await;

    // The demo account logs in and browses the feed.
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

    let (_, body) = call(&app, get("/api/posts")).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);

    // A passer-by signs up, likes the wallet post, then thinks better of it.
    let (_, body) = call(
        &app,
        post_json(
            "/api/auth/signup",
            json!({ "email": "finder@example.com", "password": "pw", "name": "Finder" }),
        ),
    )
    .await;
    let finder = body["user"]["id"].as_str().unwrap().to_owned();

    let (_, body) = call(&app, post_json("/api/posts/p1/like", json!({ "userId": &finder }))).await;
    assert_eq!(body["post"]["likes"], 25);
    let (_, body) = call(&app, delete_json("/api/posts/p1/like", json!({ "userId": &finder }))).await;
    assert_eq!(body["post"]["likes"], 24);
    assert_eq!(body["post"]["likedBy"], json!([]));

    // They reach out about the wallet; the thread is created once.
    let (_, body) = call(
        &app,
        post_json(
            "/api/conversations",
            json!({
                "userId1": &finder,
                "userId2": "demo-user",
                "postId": "p1",
                "postTitle": "Lost Black Wallet - Downtown Area",
            }),
        ),
    )
    .await;
    let thread = body["conversation"]["id"].as_str().unwrap().to_owned();

    let uri = format!("/api/conversations/{thread}/messages");
    let (_, body) = call(
        &app,
        post_json(&uri, json!({ "senderId": &finder, "text": "I found it! Can we meet tomorrow?" })),
    )
    .await;
    assert_eq!(body["message"]["conversationId"], thread.as_str());

    // Both inboxes show the same thread with the fresh preview.
    let (_, body) = call(&app, get("/api/conversations?userId=demo-user")).await;
    let inbox = body["conversations"].as_array().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["lastMessage"], "I found it! Can we meet tomorrow?");
    assert_eq!(inbox[0]["otherUser"]["name"], "Finder");

    let uri = format!("/api/conversations?userId={finder}");
    let (_, body) = call(&app, get(&uri)).await;
    assert_eq!(body["conversations"][0]["otherUser"]["id"], "demo-user");
}
