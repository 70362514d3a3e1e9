//! 日志初始化
//!
//! 基于tracing的日志框架。`RUST_LOG` 环境变量优先于配置中的日志级别。

use crate::config::{LogLevel, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// 日志目标名称，所有事件日志都使用该target
pub const LOG_TARGET: &str = "node_events";

/// 初始化日志系统
///
/// 配置tracing日志框架，设置环境变量过滤器。
/// 如果全局subscriber已经安装（例如宿主引擎已初始化日志），则保持原样。
pub fn init_logging(config: &LoggingConfig) {
    if !config.log_to_console {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter_directive()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    tracing::debug!(target: LOG_TARGET, level = ?config.level, "Logging initialized");
}

impl LogLevel {
    /// 转换为EnvFilter指令
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(LogLevel::Warn.as_filter_directive(), "warn");
        assert_eq!(LogLevel::Trace.as_filter_directive(), "trace");
    }

    #[test]
    fn test_init_logging_twice() {
        let config = LoggingConfig::default();
        init_logging(&config);
        init_logging(&config);
    }
}
