//! 脚本事件模块
//!
//! 让脚本层订阅节点生命周期事件（进入/离开场景、过渡、清理、每帧、触摸）。

pub mod dispatcher;
pub mod handle;
pub mod kind;
#[cfg(test)]
mod property_tests;
pub mod registry;

// 重新导出主要类型
pub use dispatcher::ScriptEventDispatcher;
pub use handle::{ListenerId, ScriptHandle};
pub use kind::{NodeEvent, TouchBeganResponse, TouchMode, TouchMovedResponse};
pub use registry::{
    DispatchReport, ListenerEntry, ListenerTable, RegistrySnapshot, ScriptEventRegistry,
};
