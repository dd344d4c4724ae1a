use async_trait::async_trait;

use crate::errors::CacheError;

/// 缓存后端特征
///
/// 所有后端统一存储 JSON 文本；`get` 返回 `Ok(None)` 表示键不存在。
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// 写入缓存值
    async fn put(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// 读取缓存值
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// 释放后端句柄
    async fn close(&self) -> Result<(), CacheError>;
}
