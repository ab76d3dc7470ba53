//! Conversations and messaging.

use std::sync::Arc;

use chrono::Utc;
use domains::models::{Conversation, Message, User};
use domains::{ids, DomainError, RecordStore, Result};
use tracing::info;

/// A conversation joined with the counterparty's record, resolved relative
/// to the user whose inbox is being assembled. `other_user` is `None` when
/// the counterparty's account no longer resolves.
#[derive(Debug, Clone)]
pub struct ConversationWithPeer {
    pub conversation: Conversation,
    pub other_user: Option<User>,
}

/// Opens threads, lists inboxes, appends and reads messages.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn RecordStore>,
}

impl ChatService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the thread between the two users about one listing, creating
    /// it on first contact. Calling this again with the participants in
    /// either order hands back the same thread, never a sibling.
    pub async fn open_conversation(
        &self,
        user_a: &str,
        user_b: &str,
        post_id: &str,
        post_title: &str,
    ) -> Result<Conversation> {
        if user_a == user_b {
            return Err(DomainError::Validation(
                "conversation requires two distinct participants".into(),
            ));
        }
        if post_id.is_empty() {
            return Err(DomainError::Validation("postId required".into()));
        }
        let candidate = Conversation {
            id: ids::conversation(),
            participants: [user_a.to_owned(), user_b.to_owned()],
            last_message: String::new(),
            last_message_time: Utc::now(),
            post_id: post_id.to_owned(),
            post_title: post_title.to_owned(),
        };
        self.store.find_or_create_conversation(candidate).await
    }

    /// The user's inbox: every thread they participate in, each joined with
    /// the user on the other side.
    pub async fn conversations_for(&self, user_id: &str) -> Result<Vec<ConversationWithPeer>> {
        let conversations = self.store.list_conversations_for(user_id).await?;
        let mut inbox = Vec::with_capacity(conversations.len());
        for conversation in conversations {
            let other_user = match conversation.other_participant(user_id) {
                Some(peer_id) => self.store.find_user(peer_id).await?,
                None => None,
            };
            inbox.push(ConversationWithPeer {
                conversation,
                other_user,
            });
        }
        Ok(inbox)
    }

    /// Appends a message to a thread. The store refreshes the thread's
    /// preview in the same step, and keeps the message even when the thread
    /// id matches nothing.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> Result<Message> {
        let message = Message {
            id: ids::message(),
            conversation_id: conversation_id.to_owned(),
            sender_id: sender_id.to_owned(),
            text: text.to_owned(),
            timestamp: Utc::now(),
        };
        let message = self.store.append_message(message).await?;
        info!(
            conversation = %message.conversation_id,
            sender = %message.sender_id,
            "message sent"
        );
        Ok(message)
    }

    /// Full history of one thread, oldest first.
    pub async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        self.store.list_messages(conversation_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::MockRecordStore;

    fn peer(id: &str) -> User {
        User {
            id: id.into(),
            email: format!("{id}@example.com"),
            password: "pw".into(),
            name: "Finder".into(),
            avatar: "https://example.com/f.svg".into(),
            bio: None,
            joined_date: Utc::now(),
        }
    }

    fn thread(id: &str, a: &str, b: &str) -> Conversation {
        Conversation {
            id: id.into(),
            participants: [a.into(), b.into()],
            last_message: "any sign of it?".into(),
            last_message_time: Utc::now(),
            post_id: "p1".into(),
            post_title: "Lost wallet".into(),
        }
    }

    #[tokio::test]
    async fn open_rejects_a_conversation_with_oneself() {
        // No expectations: the store must not even be asked.
        let chat = ChatService::new(Arc::new(MockRecordStore::new()));
        let err = chat
            .open_conversation("user-1", "user-1", "p1", "Lost wallet")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("conversation requires two distinct participants".into())
        );
    }

    #[tokio::test]
    async fn open_rejects_an_empty_post_id() {
        let chat = ChatService::new(Arc::new(MockRecordStore::new()));
        let err = chat
            .open_conversation("user-1", "user-2", "", "Lost wallet")
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Validation("postId required".into()));
    }

    #[tokio::test]
    async fn open_hands_the_store_a_blank_preview_candidate() {
        let mut mock = MockRecordStore::new();
        mock.expect_find_or_create_conversation()
            .withf(|candidate: &Conversation| {
                candidate.id.starts_with("conv-")
                    && candidate.participants == ["user-1".to_owned(), "user-2".to_owned()]
                    && candidate.last_message.is_empty()
                    && candidate.post_id == "p1"
            })
            .times(1)
            .returning(|candidate| Ok(candidate));

        ChatService::new(Arc::new(mock))
            .open_conversation("user-1", "user-2", "p1", "Lost wallet")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn inbox_resolves_the_counterparty() {
        let mut mock = MockRecordStore::new();
        mock.expect_list_conversations_for()
            .withf(|user_id: &str| user_id == "user-1")
            .returning(|_| {
                Ok(vec![
                    thread("conv-1", "user-1", "user-2"),
                    thread("conv-2", "user-3", "user-1"),
                ])
            });
        mock.expect_find_user().returning(|id| match id {
            "user-2" => Ok(Some(peer(id))),
            _ => Ok(None),
        });

        let inbox = ChatService::new(Arc::new(mock))
            .conversations_for("user-1")
            .await
            .unwrap();
        assert_eq!(inbox.len(), 2);
        assert_eq!(inbox[0].other_user.as_ref().unwrap().id, "user-2");
        // Counterparty account gone: the thread still shows up.
        assert!(inbox[1].other_user.is_none());
    }

    #[tokio::test]
    async fn send_message_stamps_id_and_time() {
        let mut mock = MockRecordStore::new();
        mock.expect_append_message()
            .withf(|message: &Message| {
                message.id.starts_with("msg-")
                    && message.conversation_id == "conv-1"
                    && message.sender_id == "user-1"
                    && message.text == "I think I found your wallet"
            })
            .times(1)
            .returning(|message| Ok(message));

        let sent = ChatService::new(Arc::new(mock))
            .send_message("conv-1", "user-1", "I think I found your wallet")
            .await
            .unwrap();
        assert_eq!(sent.text, "I think I found your wallet");
    }
}
