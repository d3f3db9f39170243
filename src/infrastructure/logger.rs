//! 日志基础设施

use tracing_subscriber::EnvFilter;

use crate::core::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 按配置的级别初始化全局日志，进程内只能调用一次
    pub fn init(config: &LoggingConfig) {
        let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}
