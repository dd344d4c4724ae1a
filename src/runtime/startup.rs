use crate::config::get_config;
use crate::errors::CacheError;
use crate::facade::CacheFacade;

/// 启动上下文
pub struct StartupContext {
    pub facade: CacheFacade,
}

/// 初始化缓存门面
pub async fn prepare_cache() -> Result<StartupContext, CacheError> {
    let config = get_config();

    // 1. 初始化 Rust-TLS
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| CacheError::Internal("Failed to install crypto provider".into()))?;

    // 2. 初始化日志
    crate::system::logging::init_logging(&config.log);
    tracing::info!("CacheGate v{} starting...", env!("CARGO_PKG_VERSION"));

    // 3. 验证配置
    config.validate()?;

    // 4. 构建缓存门面
    tracing::info!("Initializing cache backends...");
    let facade = CacheFacade::connect(config).await?;

    // 5. 运行 PostgreSQL 迁移（服务不可达时告警并继续）
    if let Err(e) = facade.run_migrations().await {
        tracing::warn!("PostgreSQL migrations failed: {}", e.format_simple());
        tracing::warn!("The relational backend will surface errors on first use");
    }

    tracing::info!("Cache facade ready");

    Ok(StartupContext { facade })
}
