use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{self, Document, doc, oid::ObjectId},
};

use crate::post::post_model::{BlogPost, NewBlogPost, PostUpdate};
use crate::post::post_store::{PostStore, StoreError};

pub const COLLECTION_NAME: &str = "blogposts";

/// MongoDB-backed post store.
pub struct MongoPostStore {
    client: Client,
    collection: Collection<BlogPost>,
}

impl MongoPostStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let collection = client
            .database(database)
            .collection::<BlogPost>(COLLECTION_NAME);
        MongoPostStore {
            client: client.clone(),
            collection,
        }
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
    }
}

/// Build the `$set` body for a partial update, whitelisted fields only.
pub fn set_document(changes: &PostUpdate) -> Result<Document, StoreError> {
    let mut set = Document::new();
    if let Some(title) = &changes.title {
        set.insert("title", title.as_str());
    }
    if let Some(content) = &changes.content {
        set.insert("content", content.as_str());
    }
    if let Some(author) = &changes.author {
        set.insert("author", bson::to_bson(author)?);
    }
    Ok(set)
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn find(&self, limit: i64) -> Result<Vec<BlogPost>, StoreError> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let posts: Vec<BlogPost> = cursor.try_collect().await?;
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        let object_id = Self::parse_id(id)?;
        let post = self.collection.find_one(doc! { "_id": object_id }).await?;
        Ok(post)
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let post = BlogPost {
            id: ObjectId::new(),
            title: post.title,
            content: post.content,
            author: post.author,
            created: bson::DateTime::now(),
        };

        self.collection.insert_one(&post).await?;
        Ok(post)
    }

    async fn update_by_id(&self, id: &str, changes: PostUpdate) -> Result<(), StoreError> {
        let object_id = Self::parse_id(id)?;
        if changes.is_empty() {
            return Ok(());
        }

        let set = set_document(&changes)?;
        self.collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": set })
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let object_id = Self::parse_id(id)?;
        self.collection.delete_one(doc! { "_id": object_id }).await?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        log::info!("Disconnected from MongoDB");
    }
}
