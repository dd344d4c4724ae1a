use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task;

use crate::backends::traits::CacheStore;
use crate::config::MemcachedConfig;
use crate::errors::CacheError;

/// Memcached 缓存后端
///
/// `memcache` 客户端是阻塞式协议实现，所有调用都经由
/// `spawn_blocking` 移出异步运行时。连接在首次操作时建立。
pub struct MemcachedStore {
    url: String,
    client: OnceCell<Arc<memcache::Client>>,
}

impl MemcachedStore {
    pub fn new(config: &MemcachedConfig) -> Self {
        Self {
            url: config.url.clone(),
            client: OnceCell::new(),
        }
    }

    /// 获取共享客户端，未连接时先连接
    async fn client(&self) -> Result<Arc<memcache::Client>, CacheError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                tracing::debug!("Establishing Memcached connection");
                let url = self.url.clone();
                let client = task::spawn_blocking(move || memcache::Client::connect(url))
                    .await
                    .map_err(CacheError::from)??;
                Ok::<_, CacheError>(Arc::new(client))
            })
            .await?;
        Ok(client.clone())
    }
}

#[async_trait]
impl CacheStore for MemcachedStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let client = self.client().await?;
        let key = key.to_string();
        let value = value.to_string();
        // expiration 0 表示不过期
        task::spawn_blocking(move || client.set(&key, value.as_str(), 0)).await??;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let client = self.client().await?;
        let key = key.to_string();
        let value: Option<String> = task::spawn_blocking(move || client.get(&key)).await??;
        Ok(value)
    }

    async fn close(&self) -> Result<(), CacheError> {
        // 连接池在句柄释放时关闭
        tracing::debug!("Releasing Memcached connection");
        Ok(())
    }
}
