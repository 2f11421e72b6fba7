use async_trait::async_trait;
use thiserror::Error;

use crate::post::post_model::{BlogPost, NewBlogPost, PostUpdate};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
}

/// Document-store operations the HTTP layer relies on.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Up to `limit` posts in the store's natural order.
    async fn find(&self, limit: i64) -> Result<Vec<BlogPost>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError>;

    /// Persist a new post. The store assigns `id` and `created`.
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, StoreError>;

    /// `$set` the fields present in `changes`. A missing id is not an error.
    async fn update_by_id(&self, id: &str, changes: PostUpdate) -> Result<(), StoreError>;

    /// Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Tear down the underlying connection.
    async fn close(&self);
}
