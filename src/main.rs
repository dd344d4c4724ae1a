use cachegate::CacheError;
use cachegate::config::{args, init_config};
use cachegate::runtime::{prepare_cache, run_demo};
use cachegate::system::install_panic_hook;
use std::env;

#[tokio::main]
async fn main() -> Result<(), CacheError> {
    // 安装 panic hook
    install_panic_hook();

    // 解析命令行参数获取配置文件路径
    let cli_args: Vec<String> = env::args().collect();
    let config_path = args::parse_config_path(&cli_args);

    // 初始化全局配置
    init_config(config_path);

    // 初始化缓存门面
    let ctx = prepare_cache().await?;

    // 依次演练五个后端
    run_demo(ctx).await?;

    Ok(())
}
