//! 节点生命周期事件与触摸代码
//!
//! 脚本侧使用整数代码订阅事件，这里把它们收敛成封闭的枚举类型。
//! 整数代码与脚本桥约定保持一致，不能随意修改。

use crate::core::error::{DispatcherError, DispatcherResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 节点生命周期事件
///
/// 排序与事件代码一致，注册表按代码顺序遍历事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeEvent {
    /// 节点进入场景
    Enter = 1,
    /// 节点离开场景
    Exit = 2,
    /// 进入场景的过渡动画结束
    EnterTransitionDidFinish = 3,
    /// 离开场景的过渡动画开始
    ExitTransitionDidStart = 4,
    /// 节点清理
    Cleanup = 5,
    /// 每帧更新
    EnterFrame = 6,
    /// 触摸
    Touch = 7,
}

impl NodeEvent {
    /// 所有事件，按代码顺序
    pub const ALL: [NodeEvent; 7] = [
        NodeEvent::Enter,
        NodeEvent::Exit,
        NodeEvent::EnterTransitionDidFinish,
        NodeEvent::ExitTransitionDidStart,
        NodeEvent::Cleanup,
        NodeEvent::EnterFrame,
        NodeEvent::Touch,
    ];

    /// 脚本侧使用的整数代码
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeEvent::Enter => "enter",
            NodeEvent::Exit => "exit",
            NodeEvent::EnterTransitionDidFinish => "enter_transition_did_finish",
            NodeEvent::ExitTransitionDidStart => "exit_transition_did_start",
            NodeEvent::Cleanup => "cleanup",
            NodeEvent::EnterFrame => "enter_frame",
            NodeEvent::Touch => "touch",
        }
    }
}

impl TryFrom<i32> for NodeEvent {
    type Error = DispatcherError;

    fn try_from(code: i32) -> DispatcherResult<Self> {
        NodeEvent::ALL
            .into_iter()
            .find(|event| event.code() == code)
            .ok_or(DispatcherError::UnknownEvent(code))
    }
}

impl From<NodeEvent> for i32 {
    fn from(event: NodeEvent) -> Self {
        event.code()
    }
}

impl fmt::Display for NodeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 触摸分发模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchMode {
    /// 一次性接收所有触点
    #[default]
    AllAtOnce = 0,
    /// 逐个接收触点
    OneByOne = 1,
}

/// 脚本对 touch began 的返回值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchBeganResponse {
    /// 不处理该触摸
    Ignore = 0,
    /// 处理并吞掉该触摸
    Swallows = 1,
    /// 处理但允许继续传递
    NoSwallows = 2,
}

impl TouchBeganResponse {
    /// 脚本是否接管了该触摸
    pub fn is_claimed(self) -> bool {
        !matches!(self, TouchBeganResponse::Ignore)
    }
}

/// 脚本对 touch moved 的返回值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchMovedResponse {
    NoSwallows = 0,
    Swallows = 1,
    /// 吞掉触摸并释放其他接收者
    ReleaseOthers = 2,
}

macro_rules! impl_touch_code {
    ($ty:ident, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        impl $ty {
            /// 脚本侧使用的整数代码
            pub fn code(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = DispatcherError;

            fn try_from(code: i32) -> DispatcherResult<Self> {
                [$($ty::$variant),+]
                    .into_iter()
                    .find(|value| value.code() == code)
                    .ok_or(DispatcherError::UnknownTouchCode { kind: $kind, code })
            }
        }
    };
}

impl_touch_code!(TouchMode, "touch mode", [AllAtOnce, OneByOne]);
impl_touch_code!(
    TouchBeganResponse,
    "touch began response",
    [Ignore, Swallows, NoSwallows]
);
impl_touch_code!(
    TouchMovedResponse,
    "touch moved response",
    [NoSwallows, Swallows, ReleaseOthers]
);
