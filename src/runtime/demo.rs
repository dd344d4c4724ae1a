use serde_json::{Value, json};

use crate::errors::CacheError;
use crate::facade::{Backend, CacheFacade};
use crate::runtime::startup::StartupContext;

/// 依次演练全部后端
///
/// 在同一个键上给每个后端写入一个独立负载，读回并打印；
/// 单个后端失败只告警，不终止演示。
pub async fn run_demo(ctx: StartupContext) -> Result<(), CacheError> {
    let facade = &ctx.facade;

    let payloads: [(Backend, Value); 5] = [
        (Backend::Memory, json!({"e": 5})),
        (Backend::Redis, json!({"a": 1})),
        (Backend::Memcached, json!({"b": 2})),
        (Backend::MongoDb, json!({"c": 3})),
        (Backend::Postgres, json!({"d": 4})),
    ];

    for (backend, payload) in &payloads {
        if let Err(e) = exercise_backend(facade, *backend, payload).await {
            tracing::warn!("Backend {} failed: {}", backend, e.format_simple());
        }
    }

    facade.close().await?;
    Ok(())
}

/// 写入负载再读回打印
async fn exercise_backend(
    facade: &CacheFacade,
    backend: Backend,
    payload: &Value,
) -> Result<(), CacheError> {
    facade.set("myKey", payload, backend).await?;

    let value: Option<Value> = facade.get("myKey", backend).await?;
    match value {
        Some(value) => println!("{:>9} => {}", backend, value),
        None => println!("{:>9} => (not found)", backend),
    }

    Ok(())
}
