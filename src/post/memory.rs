//! In-memory post store - used by tests and when `DATABASE_URL=memory://`.
//! Data is lost on process restart.

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId};
use tokio::sync::RwLock;

use crate::post::post_model::{BlogPost, NewBlogPost, PostUpdate};
use crate::post::post_store::{PostStore, StoreError};

/// Insertion order is the natural order returned by `find`.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find(&self, limit: i64) -> Result<Vec<BlogPost>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let posts = self.posts.read().await;
        Ok(posts.iter().take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        let object_id = Self::parse_id(id)?;
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == object_id).cloned())
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let post = BlogPost {
            id: ObjectId::new(),
            title: post.title,
            content: post.content,
            author: post.author,
            created: bson::DateTime::now(),
        };

        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update_by_id(&self, id: &str, changes: PostUpdate) -> Result<(), StoreError> {
        let object_id = Self::parse_id(id)?;
        let mut posts = self.posts.write().await;
        if let Some(post) = posts.iter_mut().find(|p| p.id == object_id) {
            changes.apply_to(post);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let object_id = Self::parse_id(id)?;
        self.posts.write().await.retain(|p| p.id != object_id);
        Ok(())
    }

    async fn close(&self) {
        log::debug!("In-memory post store closed");
    }
}
