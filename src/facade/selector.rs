use std::fmt;
use std::str::FromStr;

use crate::errors::CacheError;

/// 后端选择器
///
/// 每次调用选择一个目标后端；不校验对应服务是否可达。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// 进程内缓存
    Memory,
    /// Redis 键值存储
    Redis,
    /// Memcached 键值存储
    Memcached,
    /// MongoDB 文档存储
    MongoDb,
    /// PostgreSQL 关系存储
    Postgres,
}

impl Backend {
    /// 按演示顺序排列的全部后端
    pub const ALL: [Backend; 5] = [
        Backend::Memory,
        Backend::Redis,
        Backend::Memcached,
        Backend::MongoDb,
        Backend::Postgres,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::Redis => "redis",
            Backend::Memcached => "memcached",
            Backend::MongoDb => "mongodb",
            Backend::Postgres => "postgres",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" | "in-memory" => Ok(Backend::Memory),
            "redis" => Ok(Backend::Redis),
            "memcached" => Ok(Backend::Memcached),
            "mongodb" => Ok(Backend::MongoDb),
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            other => Err(CacheError::UnknownBackend(other.to_string())),
        }
    }
}
