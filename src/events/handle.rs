//! 脚本回调句柄与监听器标识

use serde::{Deserialize, Serialize};
use std::fmt;

/// 脚本侧函数的不透明引用
///
/// 由脚本桥分配（例如Lua registry中的引用编号），本模块不会解引用它。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptHandle(i32);

impl ScriptHandle {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// 交还给脚本桥的原始值
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ScriptHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script:{}", self.0)
    }
}

/// 注册监听器时返回的标识，用于之后的移除
///
/// 在同一个注册表内单调递增，不会复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_display() {
        assert_eq!(ScriptHandle::new(42).to_string(), "script:42");
        assert_eq!(ListenerId::from_raw(7).to_string(), "#7");
    }

    #[test]
    fn test_handle_serializes_transparently() {
        let json = serde_json::to_string(&ScriptHandle::new(-3)).unwrap();
        assert_eq!(json, "-3");
        let id: ListenerId = serde_json::from_str("12").unwrap();
        assert_eq!(id.raw(), 12);
    }
}
