//! Listing creation and the public feed.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use domains::models::{Post, PostKind, User};
use domains::{ids, RecordStore, Result};
use tracing::info;

/// Input for a new listing, as collected from the author.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub kind: PostKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub author_id: String,
}

/// A listing joined with its author's record, the unit the feed renders.
/// `author` is `None` when the author id no longer resolves.
#[derive(Debug, Clone)]
pub struct AuthoredPost {
    pub post: Post,
    pub author: Option<User>,
}

/// Creates listings and assembles the feed.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn RecordStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Stores a new listing with zeroed engagement and returns it joined
    /// with its author.
    pub async fn create(&self, new_post: NewPost) -> Result<AuthoredPost> {
        let post = Post {
            id: ids::post(),
            kind: new_post.kind,
            title: new_post.title,
            description: new_post.description,
            image: new_post.image,
            location: new_post.location,
            date: new_post.date,
            author_id: new_post.author_id,
            likes: 0,
            liked_by: vec![],
            comments: 0,
            created_at: Utc::now(),
        };
        let post = self.store.create_post(post).await?;
        info!(post = %post.id, "listing published");
        let author = self.store.find_user(&post.author_id).await?;
        Ok(AuthoredPost { post, author })
    }

    /// The feed, optionally narrowed to one author, each post joined with
    /// its author. Order is the store's insertion order.
    pub async fn browse(&self, author_id: Option<&str>) -> Result<Vec<AuthoredPost>> {
        let posts = match author_id {
            Some(author_id) => self.store.list_posts_by_author(author_id).await?,
            None => self.store.list_posts().await?,
        };
        let mut feed = Vec::with_capacity(posts.len());
        for post in posts {
            let author = self.store.find_user(&post.author_id).await?;
            feed.push(AuthoredPost { post, author });
        }
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::MockRecordStore;

    fn new_post(author_id: &str) -> NewPost {
        NewPost {
            kind: PostKind::Lost,
            title: "Lost scarf".into(),
            description: "Red wool".into(),
            location: "Old Town".into(),
            date: NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
            image: None,
            author_id: author_id.into(),
        }
    }

    fn author(id: &str) -> User {
        User {
            id: id.into(),
            email: format!("{id}@example.com"),
            password: "pw".into(),
            name: "Ada".into(),
            avatar: "https://example.com/a.svg".into(),
            bio: None,
            joined_date: Utc::now(),
        }
    }

    fn stored_post(id: &str, author_id: &str) -> Post {
        Post {
            id: id.into(),
            kind: PostKind::Found,
            title: "Found gloves".into(),
            description: "Left on a bench".into(),
            image: None,
            location: "Riverside".into(),
            date: NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
            author_id: author_id.into(),
            likes: 3,
            liked_by: vec!["user-2".into()],
            comments: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_zeroes_engagement_and_joins_the_author() {
        let mut mock = MockRecordStore::new();
        mock.expect_create_post()
            .withf(|post: &Post| {
                post.id.starts_with("post-")
                    && post.likes == 0
                    && post.liked_by.is_empty()
                    && post.comments == 0
            })
            .returning(|post| Ok(post));
        mock.expect_find_user()
            .withf(|id: &str| id == "user-1")
            .returning(|id| Ok(Some(author(id))));

        let authored = PostService::new(Arc::new(mock))
            .create(new_post("user-1"))
            .await
            .unwrap();
        assert_eq!(authored.post.title, "Lost scarf");
        assert_eq!(authored.author.unwrap().id, "user-1");
    }

    #[tokio::test]
    async fn browse_joins_each_post_with_its_author() {
        let mut mock = MockRecordStore::new();
        mock.expect_list_posts()
            .returning(|| Ok(vec![stored_post("post-1", "user-1"), stored_post("post-2", "user-9")]));
        mock.expect_find_user().returning(|id| match id {
            "user-1" => Ok(Some(author(id))),
            _ => Ok(None),
        });

        let feed = PostService::new(Arc::new(mock)).browse(None).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert!(feed[0].author.is_some());
        // A dangling author id must not drop the post from the feed.
        assert!(feed[1].author.is_none());
    }

    #[tokio::test]
    async fn browse_narrows_to_one_author_when_asked() {
        let mut mock = MockRecordStore::new();
        mock.expect_list_posts_by_author()
            .withf(|author_id: &str| author_id == "user-1")
            .returning(|author_id| Ok(vec![stored_post("post-1", author_id)]));
        mock.expect_find_user()
            .returning(|id| Ok(Some(author(id))));

        let feed = PostService::new(Arc::new(mock))
            .browse(Some("user-1"))
            .await
            .unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].post.author_id, "user-1");
    }
}
