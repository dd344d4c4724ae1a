use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backends::{
    CacheStore, MemcachedStore, MemoryStore, MongoStore, PostgresStore, RedisStore,
};
use crate::config::AppConfig;
use crate::errors::CacheError;
use crate::facade::selector::Backend;

/// 多后端缓存门面
///
/// 持有五个后端各一个句柄，把 `set`/`get` 路由到选中的后端。
/// 值进出时统一做 JSON 文本序列化；后端之间互不协调。
pub struct CacheFacade {
    memory: MemoryStore,
    redis: RedisStore,
    memcached: MemcachedStore,
    mongodb: MongoStore,
    postgres: PostgresStore,
    closed: AtomicBool,
}

impl CacheFacade {
    /// 从配置构建全部后端句柄
    ///
    /// 外部后端的连接都是按需建立的，这里只解析连接串；
    /// 不可达的后端要到首次操作时才暴露错误。
    pub async fn connect(config: &AppConfig) -> Result<Self, CacheError> {
        let memory = MemoryStore::new(&config.memory);
        let redis = RedisStore::new(&config.redis)?;
        let memcached = MemcachedStore::new(&config.memcached);
        let mongodb = MongoStore::new(&config.mongodb).await?;
        let postgres = PostgresStore::new(&config.postgres)?;

        tracing::info!("Cache facade initialized ({} backends)", Backend::ALL.len());

        Ok(Self {
            memory,
            redis,
            memcached,
            mongodb,
            postgres,
            closed: AtomicBool::new(false),
        })
    }

    /// 运行 PostgreSQL 迁移（创建 cache 表）
    pub async fn run_migrations(&self) -> Result<(), CacheError> {
        self.ensure_open()?;
        self.postgres.run_migrations().await
    }

    /// 写入缓存
    ///
    /// 序列化失败不触碰任何后端；后端写入失败原样返回给调用方。
    pub async fn set<T>(&self, key: &str, value: &T, backend: Backend) -> Result<(), CacheError>
    where
        T: Serialize + ?Sized,
    {
        self.ensure_open()?;
        let text = serde_json::to_string(value)?;

        tracing::debug!("Cache set [{}]: {}", backend, key);
        self.store(backend).put(key, &text).await
    }

    /// 读取缓存
    ///
    /// 键不存在返回 `Ok(None)`；存储的文本无法解析为 JSON 时返回
    /// 序列化错误。
    pub async fn get<T>(&self, key: &str, backend: Backend) -> Result<Option<T>, CacheError>
    where
        T: DeserializeOwned,
    {
        self.ensure_open()?;

        tracing::debug!("Cache get [{}]: {}", backend, key);
        match self.store(backend).get(key).await? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// 关闭门面并释放所有后端句柄
    ///
    /// 五个后端并发关闭，相互之间没有顺序保证；全部尝试完成后
    /// 返回第一个失败。关闭后任何调用都返回 `CacheError::Closed`。
    pub async fn close(&self) -> Result<(), CacheError> {
        self.ensure_open()?;
        self.closed.store(true, Ordering::SeqCst);

        let (memory, redis, memcached, mongodb, postgres) = futures::join!(
            self.memory.close(),
            self.redis.close(),
            self.memcached.close(),
            self.mongodb.close(),
            self.postgres.close(),
        );

        tracing::info!("Cache facade closed");
        memory
            .and(redis)
            .and(memcached)
            .and(mongodb)
            .and(postgres)
    }

    fn store(&self, backend: Backend) -> &dyn CacheStore {
        match backend {
            Backend::Memory => &self.memory,
            Backend::Redis => &self.redis,
            Backend::Memcached => &self.memcached,
            Backend::MongoDb => &self.mongodb,
            Backend::Postgres => &self.postgres,
        }
    }

    fn ensure_open(&self) -> Result<(), CacheError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(CacheError::Closed);
        }
        Ok(())
    }
}
