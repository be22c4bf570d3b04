use anyhow::Result;
use billed::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init_verbose(config.verbose_logging);

    // 初始化并运行应用
    let _stats = App::initialize(config)?.run().await?;

    Ok(())
}
