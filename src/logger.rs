//! tracing 初始化

use tracing_subscriber::EnvFilter;

/// 初始化日志，默认 info 级别，可用 `RUST_LOG` 覆盖
pub fn init() {
    init_with_level("info");
}

/// `verbose` 为 true 时默认打开 debug 级别
pub fn init_verbose(verbose: bool) {
    init_with_level(if verbose { "billed=debug,info" } else { "info" });
}

fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 测试中可能被多次调用，重复初始化时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
