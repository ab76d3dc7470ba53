//! In-memory implementation of [`RecordStore`].

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use domains::models::{Conversation, Message, Post, User};
use domains::{DomainError, RecordStore, Result};
use tracing::{debug, warn};

/// Every collection the store keeps, guarded together.
#[derive(Debug, Default)]
struct Records {
    users: Vec<User>,
    posts: Vec<Post>,
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

/// Process-local [`RecordStore`] backend.
///
/// # Developer Note
/// All state sits behind a single `std::sync::Mutex`, not per-collection
/// locks. The compound operations (conversation dedup, like bookkeeping,
/// message previews) each touch more than one piece of state, and one
/// coarse lock makes every port call a single writer-serialized critical
/// section. The guard is never held across an `.await`; each call locks,
/// mutates, clones what it returns, and releases.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Records>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock poisoning means a panic mid-mutation; surface it as an internal
    /// error instead of propagating the panic to every later caller.
    fn lock(&self) -> Result<MutexGuard<'_, Records>> {
        self.records
            .lock()
            .map_err(|_| DomainError::Internal("record store lock poisoned".into()))
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    // ---- Users ----

    async fn create_user(&self, user: User) -> Result<User> {
        let mut records = self.lock()?;
        if records.users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::Validation("User already exists".into()));
        }
        debug!(user = %user.id, "user created");
        records.users.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>> {
        let records = self.lock()?;
        Ok(records.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let records = self.lock()?;
        Ok(records.users.iter().find(|u| u.email == email).cloned())
    }

    // ---- Posts ----

    async fn create_post(&self, post: Post) -> Result<Post> {
        let mut records = self.lock()?;
        debug!(post = %post.id, author = %post.author_id, "post created");
        records.posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let records = self.lock()?;
        Ok(records.posts.clone())
    }

    async fn list_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>> {
        let records = self.lock()?;
        Ok(records
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>> {
        let records = self.lock()?;
        Ok(records.posts.iter().find(|p| p.id == id).cloned())
    }

    // ---- Likes ----

    async fn like_post(&self, post_id: &str, user_id: &str) -> Result<Option<Post>> {
        let mut records = self.lock()?;
        let Some(post) = records.posts.iter_mut().find(|p| p.id == post_id) else {
            warn!(post = post_id, "like for unknown post ignored");
            return Ok(None);
        };
        if !post.is_liked_by(user_id) {
            post.liked_by.push(user_id.to_owned());
            post.likes += 1;
        }
        Ok(Some(post.clone()))
    }

    async fn unlike_post(&self, post_id: &str, user_id: &str) -> Result<Option<Post>> {
        let mut records = self.lock()?;
        let Some(post) = records.posts.iter_mut().find(|p| p.id == post_id) else {
            warn!(post = post_id, "unlike for unknown post ignored");
            return Ok(None);
        };
        // Only a real removal moves the count, and the count never goes
        // below zero even if it started out of step with the member set.
        if post.is_liked_by(user_id) {
            post.liked_by.retain(|id| id != user_id);
            post.likes = post.likes.saturating_sub(1);
        }
        Ok(Some(post.clone()))
    }

    async fn is_post_liked(&self, post_id: &str, user_id: &str) -> Result<bool> {
        let records = self.lock()?;
        Ok(records
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .is_some_and(|p| p.is_liked_by(user_id)))
    }

    // ---- Conversations ----

    async fn find_or_create_conversation(&self, candidate: Conversation) -> Result<Conversation> {
        let mut records = self.lock()?;
        let existing = records.conversations.iter().find(|c| {
            c.post_id == candidate.post_id
                && c.is_between(&candidate.participants[0], &candidate.participants[1])
        });
        if let Some(conversation) = existing {
            return Ok(conversation.clone());
        }
        debug!(
            conversation = %candidate.id,
            post = %candidate.post_id,
            "conversation opened"
        );
        records.conversations.push(candidate.clone());
        Ok(candidate)
    }

    async fn list_conversations_for(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let records = self.lock()?;
        Ok(records
            .conversations
            .iter()
            .filter(|c| c.involves(user_id))
            .cloned()
            .collect())
    }

    // ---- Messages ----

    async fn append_message(&self, message: Message) -> Result<Message> {
        let mut records = self.lock()?;
        match records
            .conversations
            .iter_mut()
            .find(|c| c.id == message.conversation_id)
        {
            Some(conversation) => {
                conversation.last_message = message.text.clone();
                conversation.last_message_time = message.timestamp;
            }
            // The append still goes through; the message is just invisible
            // to every inbox until such a conversation exists.
            None => warn!(
                conversation = %message.conversation_id,
                "message appended to unknown conversation"
            ),
        }
        records.messages.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        let records = self.lock()?;
        Ok(records
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect())
    }
}
