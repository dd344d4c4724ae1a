#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use std::str::FromStr;
    use std::sync::Arc;

    use crate::config::AppConfig;
    use crate::errors::CacheError;
    use crate::facade::{Backend, CacheFacade};

    /// 创建测试用门面
    ///
    /// 外部后端都是惰性连接，构建本身不需要任何在线服务；
    /// 这里的测试只触碰内存后端。
    async fn create_test_facade() -> CacheFacade {
        CacheFacade::connect(&AppConfig::default())
            .await
            .expect("Failed to build facade")
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Session {
        user: String,
        hits: u64,
        tags: Vec<String>,
    }

    #[tokio::test]
    async fn test_memory_roundtrip_preserves_structure() {
        let facade = create_test_facade().await;

        // 1. 写入结构化负载
        let session = Session {
            user: "alice".to_string(),
            hits: 42,
            tags: vec!["admin".to_string(), "beta".to_string()],
        };
        facade
            .set("session:alice", &session, Backend::Memory)
            .await
            .expect("set failed");

        // 2. 读回并深度比较
        let loaded: Option<Session> = facade
            .get("session:alice", Backend::Memory)
            .await
            .expect("get failed");
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn test_memory_roundtrip_json_value() {
        let facade = create_test_facade().await;

        facade
            .set("myKey", &json!({"e": 5}), Backend::Memory)
            .await
            .expect("set failed");

        let value: Option<Value> = facade
            .get("myKey", Backend::Memory)
            .await
            .expect("get failed");
        assert_eq!(value, Some(json!({"e": 5})));
    }

    #[tokio::test]
    async fn test_memory_miss_returns_none() {
        let facade = create_test_facade().await;

        let value: Option<Value> = facade
            .get("never-written", Backend::Memory)
            .await
            .expect("get failed");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_calls_after_close_fail_deterministically() {
        let facade = create_test_facade().await;

        // 1. 正常写入后关闭
        facade
            .set("k", &json!(1), Backend::Memory)
            .await
            .expect("set failed");
        facade.close().await.expect("close failed");

        // 2. 关闭后的 set / get / close 都必须返回 Closed
        let set_err = facade
            .set("k", &json!(2), Backend::Memory)
            .await
            .expect_err("set after close must fail");
        assert!(matches!(set_err, CacheError::Closed));

        let get_err = facade
            .get::<Value>("k", Backend::Memory)
            .await
            .expect_err("get after close must fail");
        assert!(matches!(get_err, CacheError::Closed));

        let close_err = facade
            .close()
            .await
            .expect_err("second close must fail");
        assert!(matches!(close_err, CacheError::Closed));
    }

    #[tokio::test]
    async fn test_concurrent_memory_sets_leave_one_value() {
        let facade = Arc::new(create_test_facade().await);

        // 两个并发写入者竞争同一个键
        let f1 = facade.clone();
        let f2 = facade.clone();
        let t1 = tokio::spawn(async move { f1.set("race", &json!({"v": 1}), Backend::Memory).await });
        let t2 = tokio::spawn(async move { f2.set("race", &json!({"v": 2}), Backend::Memory).await });
        t1.await.expect("task failed").expect("set failed");
        t2.await.expect("task failed").expect("set failed");

        // 结果必须是完整的 V1 或 V2，不能是撕裂值
        let value: Option<Value> = facade
            .get("race", Backend::Memory)
            .await
            .expect("get failed");
        let value = value.expect("value must exist");
        assert!(value == json!({"v": 1}) || value == json!({"v": 2}));
    }

    #[tokio::test]
    async fn test_unserializable_value_touches_no_backend() {
        let facade = create_test_facade().await;

        // 非字符串键的 map 无法序列化为 JSON 对象
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8, 2u8], 3u8);

        let err = facade
            .set("bad", &bad, Backend::Memory)
            .await
            .expect_err("set must fail");
        assert!(matches!(err, CacheError::Serialization(_)));

        // 失败的写入不能留下任何条目
        let value: Option<Value> = facade
            .get("bad", Backend::Memory)
            .await
            .expect("get failed");
        assert!(value.is_none());
    }

    #[test]
    fn test_selector_parses_every_tag() {
        for backend in Backend::ALL {
            let parsed = Backend::from_str(backend.as_str()).expect("tag must parse");
            assert_eq!(parsed, backend);
        }

        // 别名
        assert_eq!(Backend::from_str("in-memory").unwrap(), Backend::Memory);
        assert_eq!(Backend::from_str("postgresql").unwrap(), Backend::Postgres);
    }

    #[test]
    fn test_selector_rejects_unknown_tag() {
        let err = Backend::from_str("etcd").expect_err("unknown tag must fail");
        assert!(matches!(err, CacheError::UnknownBackend(tag) if tag == "etcd"));
    }
}
