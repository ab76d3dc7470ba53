//! # Wire Types
//!
//! Request payloads and response views for the JSON API. Responses reuse
//! the domain models wherever the wire shape matches them one-to-one and
//! only define views where the API reshapes data (author cards on the
//! feed, counterparty cards on the inbox).

use chrono::{DateTime, NaiveDate, Utc};
use domains::models::{Post, PostKind, User};
use serde::{Deserialize, Serialize};
use services::{AuthoredPost, ConversationWithPeer, NewPost};

// ---- Requests ----

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub image: Option<String>,
    pub author_id: String,
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        NewPost {
            kind: request.kind,
            title: request.title,
            description: request.description,
            location: request.location,
            date: request.date,
            image: request.image,
            author_id: request.author_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenConversationRequest {
    pub user_id1: String,
    pub user_id2: String,
    pub post_id: String,
    pub post_title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub sender_id: String,
    pub text: String,
}

/// `GET /api/posts?authorId=…`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub author_id: Option<String>,
}

/// `GET /api/conversations?userId=…`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxQuery {
    pub user_id: Option<String>,
}

// ---- Views ----

/// Compact author card embedded in feed responses. Its `location` echoes
/// the post's location: the feed renders the card under the post header
/// and shows where the item was, not where the author lives.
#[derive(Debug, Serialize)]
pub struct AuthorCard {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub location: String,
}

/// A feed entry: the post's own fields flattened, plus the author card.
/// `author` is `null` when the author id no longer resolves.
#[derive(Debug, Serialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub author: Option<AuthorCard>,
}

impl From<AuthoredPost> for PostView {
    fn from(authored: AuthoredPost) -> Self {
        let AuthoredPost { post, author } = authored;
        let author = author.map(|user: User| AuthorCard {
            id: user.id,
            name: user.name,
            avatar: user.avatar,
            location: post.location.clone(),
        });
        PostView { post, author }
    }
}

#[derive(Debug, Serialize)]
pub struct PeerCard {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// A conversation as the inbox renders it: counterparty resolved into a
/// card, the listing's title under the `post` key.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub id: String,
    pub other_user: Option<PeerCard>,
    pub post: String,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
}

impl From<ConversationWithPeer> for ConversationView {
    fn from(entry: ConversationWithPeer) -> Self {
        let ConversationWithPeer {
            conversation,
            other_user,
        } = entry;
        ConversationView {
            id: conversation.id,
            other_user: other_user.map(|user| PeerCard {
                id: user.id,
                name: user.name,
                avatar: user.avatar,
            }),
            post: conversation.post_title,
            last_message: conversation.last_message,
            last_message_time: conversation.last_message_time,
        }
    }
}

/// Every error response is this one shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
