use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};

use crate::backends::traits::CacheStore;
use crate::config::MongoConfig;
use crate::errors::CacheError;

/// MongoDB 缓存后端
///
/// 文档形如 `{_id: <key>, value: <JSON 文本>}`，写入为 upsert。
pub struct MongoStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn new(config: &MongoConfig) -> Result<Self, CacheError> {
        // 驱动按需建立连接，这里只解析连接串
        let client = Client::with_uri_str(&config.url).await?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Ok(Self { client, collection })
    }
}

#[async_trait]
impl CacheStore for MongoStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.collection
            .update_one(doc! { "_id": key }, doc! { "$set": { "value": value } })
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self.collection.find_one(doc! { "_id": key }).await? {
            Some(document) => {
                let value = document.get_str("value").map_err(|e| {
                    CacheError::Internal(format!("Malformed cache document for key {}: {}", key, e))
                })?;
                Ok(Some(value.to_string()))
            }
            None => Ok(None),
        }
    }

    async fn close(&self) -> Result<(), CacheError> {
        tracing::debug!("Shutting down MongoDB client");
        self.client.clone().shutdown().await;
        Ok(())
    }
}
