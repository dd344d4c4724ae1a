use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use std::sync::Arc;

use crate::backends::traits::CacheStore;
use crate::config::MemoryConfig;
use crate::errors::CacheError;

/// 内存缓存后端（基于 Moka）
pub struct MemoryStore {
    cache: Arc<MokaCache<String, String>>,
}

impl MemoryStore {
    pub fn new(config: &MemoryConfig) -> Self {
        // 不设置 TTL，条目只受容量上限约束
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self {
            cache: Arc::new(cache),
        }
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.cache.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.cache.get(key).await)
    }

    async fn close(&self) -> Result<(), CacheError> {
        self.cache.invalidate_all();
        Ok(())
    }
}
