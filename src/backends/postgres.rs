use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::backends::traits::CacheStore;
use crate::config::PostgresConfig;
use crate::errors::CacheError;

/// PostgreSQL 缓存后端
///
/// 固定两列表 `cache(key TEXT PRIMARY KEY, value TEXT NOT NULL)`，
/// 由 `migrations/` 下的 SQL 迁移创建。
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(config: &PostgresConfig) -> Result<Self, CacheError> {
        // connect_lazy: 首次查询时才建立连接
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(8))
            .connect_lazy(&config.url)?;

        Ok(Self { pool })
    }

    /// 运行数据库迁移
    pub async fn run_migrations(&self) -> Result<(), CacheError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("✓ Database migrations completed");
        Ok(())
    }
}

#[async_trait]
impl CacheStore for PostgresStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        sqlx::query(
            "INSERT INTO cache (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM cache WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn close(&self) -> Result<(), CacheError> {
        tracing::debug!("Closing PostgreSQL pool");
        self.pool.close().await;
        Ok(())
    }
}
