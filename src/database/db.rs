use std::sync::Arc;

use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

use crate::post::{InMemoryPostStore, MongoPostStore, PostStore, StoreError};

/// Store URL that selects the in-memory store instead of MongoDB.
pub const MEMORY_STORE_URL: &str = "memory://";

pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(mongodb_uri: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(mongodb_uri).await?;
        client_options.app_name = Some("blog-posts-api".to_string());

        let client = Client::with_options(client_options)?;

        // Ping the server so a bad URL fails at startup, not on the first request
        client
            .database("admin")
            .run_command(doc! {"ping": 1})
            .await?;

        log::info!("Connected successfully to MongoDB");

        Ok(Self { client })
    }
}

pub async fn connect_to_mongo(mongodb_uri: &str) -> Result<Client, mongodb::error::Error> {
    let database = Database::init(mongodb_uri).await.map_err(|e| {
        log::error!("Failed to initialize database: {}", e);
        e
    })?;
    Ok(database.client)
}

/// Open the post store named by `url`.
pub async fn connect_store(url: &str, database: &str) -> Result<Arc<dyn PostStore>, StoreError> {
    if url == MEMORY_STORE_URL {
        log::warn!("Using in-memory post store, data will not survive a restart");
        return Ok(Arc::new(InMemoryPostStore::new()));
    }

    let client = connect_to_mongo(url).await?;
    Ok(Arc::new(MongoPostStore::new(&client, database)))
}
