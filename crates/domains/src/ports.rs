//! # Core Ports
//!
//! Contracts between the domain and the outside world. Any storage backend
//! must implement these traits to be wired into the binary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Conversation, Message, Post, User};

/// Persistence contract for every record the marketplace keeps.
///
/// Implementations serialize all mutations internally, and the compound
/// operations (duplicate-email check on [`create_user`], find-or-create on
/// [`find_or_create_conversation`], the preview refresh in
/// [`append_message`], the count/membership pairing in [`like_post`] /
/// [`unlike_post`]) must each happen atomically: no interleaving writer may
/// observe the halfway state.
///
/// Reads return snapshots. A `Vec` handed out by a listing method never
/// changes under the caller, however long it is held.
///
/// [`create_user`]: RecordStore::create_user
/// [`find_or_create_conversation`]: RecordStore::find_or_create_conversation
/// [`append_message`]: RecordStore::append_message
/// [`like_post`]: RecordStore::like_post
/// [`unlike_post`]: RecordStore::unlike_post
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    // ---- Users ----

    /// Stores a new account. Fails with `Validation("User already exists")`
    /// when the email is already registered.
    async fn create_user(&self, user: User) -> Result<User>;

    async fn find_user(&self, id: &str) -> Result<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    // ---- Posts ----

    async fn create_post(&self, post: Post) -> Result<Post>;

    /// All listings in insertion order.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    async fn list_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>>;

    async fn find_post(&self, id: &str) -> Result<Option<Post>>;

    // ---- Likes ----

    /// Adds `user_id` to the post's likers. A second like from the same
    /// user changes nothing. Returns the updated post, or `None` when the
    /// post does not exist.
    async fn like_post(&self, post_id: &str, user_id: &str) -> Result<Option<Post>>;

    /// Removes `user_id` from the post's likers; the count only drops when
    /// the user was actually among them and never goes below zero.
    async fn unlike_post(&self, post_id: &str, user_id: &str) -> Result<Option<Post>>;

    async fn is_post_liked(&self, post_id: &str, user_id: &str) -> Result<bool>;

    // ---- Conversations ----

    /// Returns the existing thread matching the candidate's participants
    /// (either order) and post, or stores the candidate as a new one.
    async fn find_or_create_conversation(&self, candidate: Conversation) -> Result<Conversation>;

    /// Threads the user participates in, insertion order.
    async fn list_conversations_for(&self, user_id: &str) -> Result<Vec<Conversation>>;

    // ---- Messages ----

    /// Appends a message and refreshes its conversation's preview fields.
    /// A message referencing an unknown conversation is still kept.
    async fn append_message(&self, message: Message) -> Result<Message>;

    /// Messages of one conversation, oldest first.
    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>>;
}
