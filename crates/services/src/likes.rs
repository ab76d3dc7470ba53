//! Like and unlike bookkeeping.

use std::sync::Arc;

use domains::models::Post;
use domains::{RecordStore, Result};
use tracing::debug;

/// Thin coordinator over the store's like operations.
///
/// The pairing rules (membership drives the count, double likes are no-ops,
/// the count never dips below zero) live in the store so they hold under
/// concurrent callers; this service adds logging and keeps the web layer
/// off the port.
#[derive(Clone)]
pub struct LikeService {
    store: Arc<dyn RecordStore>,
}

impl LikeService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Likes a post for a user. `None` when the post is unknown.
    pub async fn like(&self, post_id: &str, user_id: &str) -> Result<Option<Post>> {
        debug!(post = post_id, user = user_id, "like");
        self.store.like_post(post_id, user_id).await
    }

    /// Withdraws a like. `None` when the post is unknown.
    pub async fn unlike(&self, post_id: &str, user_id: &str) -> Result<Option<Post>> {
        debug!(post = post_id, user = user_id, "unlike");
        self.store.unlike_post(post_id, user_id).await
    }

    /// Whether the user currently likes the post. Unknown posts read as
    /// not liked.
    pub async fn is_liked(&self, post_id: &str, user_id: &str) -> Result<bool> {
        self.store.is_post_liked(post_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domains::models::PostKind;
    use domains::MockRecordStore;

    #[tokio::test]
    async fn delegates_to_the_store_with_both_ids() {
        let mut mock = MockRecordStore::new();
        mock.expect_like_post()
            .withf(|post_id: &str, user_id: &str| post_id == "p1" && user_id == "demo-user")
            .times(1)
            .returning(|post_id, _| {
                Ok(Some(Post {
                    id: post_id.into(),
                    kind: PostKind::Lost,
                    title: "Lost wallet".into(),
                    description: String::new(),
                    image: None,
                    location: "Downtown".into(),
                    date: Utc::now().date_naive(),
                    author_id: "demo-user".into(),
                    likes: 25,
                    liked_by: vec!["demo-user".into()],
                    comments: 8,
                    created_at: Utc::now(),
                }))
            });
        mock.expect_is_post_liked()
            .returning(|_, _| Ok(true));

        let likes = LikeService::new(Arc::new(mock));
        let post = likes.like("p1", "demo-user").await.unwrap().unwrap();
        assert_eq!(post.likes, 25);
        assert!(likes.is_liked("p1", "demo-user").await.unwrap());
    }
}
