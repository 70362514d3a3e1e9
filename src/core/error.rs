//! 统一错误处理模块
//!
//! 提供事件分发器范围内的错误类型定义
//!
//! ## 错误类型分层
//!
//! - **注册表错误** (`DispatcherError`): 监听器查找失败、非法事件代码等
//! - **脚本错误** (`ScriptError`): 脚本侧回调执行失败
//!
//! 配置错误定义在 `config` 模块中，可以通过 `From` 转换为 `DispatcherError`。

use crate::config::ConfigError;
use crate::events::handle::ListenerId;
use crate::events::kind::NodeEvent;
use thiserror::Error;

/// 事件分发器错误类型
#[derive(Error, Debug)]
pub enum DispatcherError {
    #[error("Listener {id} not found for event {event}")]
    ListenerNotFound { event: NodeEvent, id: ListenerId },

    #[error("Unknown node event code: {0}")]
    UnknownEvent(i32),

    #[error("Unknown {kind} code: {code}")]
    UnknownTouchCode { kind: &'static str, code: i32 },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// 脚本回调错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Script runtime error: {0}")]
    Runtime(String),

    #[error("Script callback not found: {0}")]
    CallbackNotFound(i32),
}

/// 分发器结果类型别名
pub type DispatcherResult<T> = Result<T, DispatcherError>;
pub type ScriptResult<T> = Result<T, ScriptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::ParseError("unknown variant `loud`".to_string());
        let err: DispatcherError = config_err.into();
        assert!(matches!(err, DispatcherError::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let err = DispatcherError::ListenerNotFound {
            event: NodeEvent::Touch,
            id: ListenerId::from_raw(3),
        };
        assert_eq!(err.to_string(), "Listener #3 not found for event touch");

        let err = DispatcherError::UnknownTouchCode {
            kind: "touch mode",
            code: 9,
        };
        assert_eq!(err.to_string(), "Unknown touch mode code: 9");
    }
}
