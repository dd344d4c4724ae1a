use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    // Redis 错误
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    // Memcached 错误
    #[error("Memcached error: {0}")]
    Memcached(#[from] memcache::MemcacheError),

    // MongoDB 错误
    #[error("MongoDB error: {0}")]
    MongoDb(#[from] mongodb::error::Error),

    // PostgreSQL 错误
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    // 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // 通用错误
    #[error("Cache facade is closed")]
    Closed,

    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            CacheError::Redis(_) => "E001",
            CacheError::Memcached(_) => "E002",
            CacheError::MongoDb(_) => "E003",
            CacheError::Postgres(_) => "E004",
            CacheError::Migration(_) => "E005",
            CacheError::Serialization(_) => "E006",
            CacheError::Closed => "E007",
            CacheError::UnknownBackend(_) => "E008",
            CacheError::Config(_) => "E009",
            CacheError::Internal(_) => "E010",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            CacheError::Redis(_) => "Redis Error",
            CacheError::Memcached(_) => "Memcached Error",
            CacheError::MongoDb(_) => "MongoDB Error",
            CacheError::Postgres(_) => "PostgreSQL Error",
            CacheError::Migration(_) => "Migration Error",
            CacheError::Serialization(_) => "Serialization Error",
            CacheError::Closed => "Cache Closed",
            CacheError::UnknownBackend(_) => "Unknown Backend",
            CacheError::Config(_) => "Configuration Error",
            CacheError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// 格式化为彩色输出（用于日志）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }
}

impl From<tokio::task::JoinError> for CacheError {
    fn from(err: tokio::task::JoinError) -> Self {
        CacheError::Internal(format!("Blocking task failed: {}", err))
    }
}
