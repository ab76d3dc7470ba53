//! # Domain Models
//!
//! The records the marketplace keeps: accounts, listings, conversations and
//! their messages. All structs serialize straight into the wire format the
//! API exposes (camelCase keys), so adapters never need mapping layers for
//! the common cases.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered member of the exchange.
///
/// # Developer Note
/// The password is stored and compared verbatim; this backend trades
/// credential hygiene for a zero-dependency demo login. `skip_serializing`
/// keeps it out of every response regardless of which handler returns the
/// user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    /// Avatar image URL, generated from the email at signup.
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub joined_date: DateTime<Utc>,
}

/// Whether a listing reports something lost or something found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Lost,
    Found,
}

/// A lost-or-found listing on the public feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    /// Serialized as `type`, the name the feed clients expect.
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub title: String,
    pub description: String,
    /// Optional photo URL; the key is absent from responses when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form neighborhood or landmark, e.g. "Downtown District".
    pub location: String,
    /// The day the item went missing or turned up, as picked by the author.
    pub date: NaiveDate,
    pub author_id: String,
    /// Denormalized like count, kept in lockstep with `liked_by`.
    pub likes: u32,
    /// Ids of users who currently like this post. Membership here is the
    /// source of truth; `likes` is the render-ready count.
    pub liked_by: Vec<String>,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Whether `user_id` currently likes this post.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by.iter().any(|id| id == user_id)
    }
}

/// A message thread between exactly two users about one listing.
///
/// `last_message` / `last_message_time` are denormalized previews for inbox
/// rendering; appending a message refreshes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    /// The two member ids, in creation order. Matching ignores the order.
    pub participants: [String; 2],
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub post_id: String,
    /// Denormalized listing title so inboxes render without a join.
    pub post_title: String,
}

impl Conversation {
    /// Whether `user_id` is one of the two participants.
    pub fn involves(&self, user_id: &str) -> bool {
        self.participants.iter().any(|id| id == user_id)
    }

    /// The participant on the other side of the thread from `user_id`.
    pub fn other_participant(&self, user_id: &str) -> Option<&str> {
        self.participants
            .iter()
            .find(|id| *id != user_id)
            .map(String::as_str)
    }

    /// Whether this thread connects `a` and `b`, in either order.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        let [first, second] = &self.participants;
        (first == a && second == b) || (first == b && second == a)
    }
}

/// One message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
