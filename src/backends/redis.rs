use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;

use crate::backends::traits::CacheStore;
use crate::config::RedisConfig;
use crate::errors::CacheError;

/// Redis 缓存后端
///
/// 连接在首次操作时建立，构造阶段只解析 URL。
pub struct RedisStore {
    client: Client,
    conn: OnceCell<MultiplexedConnection>,
}

impl RedisStore {
    pub fn new(config: &RedisConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.url.as_str())?;

        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    /// 获取共享的 multiplexed 连接，未建立时先建立
    async fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                tracing::debug!("Establishing Redis connection");
                self.client.get_multiplexed_async_connection().await
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        // nil 回复反序列化为 None，键不存在不是错误
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn close(&self) -> Result<(), CacheError> {
        // multiplexed 连接在句柄释放时关闭，无显式 quit
        tracing::debug!("Releasing Redis connection");
        Ok(())
    }
}
