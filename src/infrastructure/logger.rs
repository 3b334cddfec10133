//! 日志基础设施

use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化全局日志，`RUST_LOG` 优先于配置中的级别
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("employee_manager={level},tower_http={level}")));

        // 重复初始化（例如测试中）时忽略错误
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
