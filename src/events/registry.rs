//! 脚本事件监听器注册表
//!
//! 维护 `事件 -> [监听器, 监听器, ...]` 的映射。每个事件的监听器按优先级升序排列，
//! 优先级相同时保持注册顺序。
//!
//! ## 示例
//!
//! ```rust
//! use node_event_dispatcher::events::{NodeEvent, ScriptEventRegistry, ScriptHandle};
//!
//! let mut registry = ScriptEventRegistry::new();
//! registry.add_listener(NodeEvent::Touch, ScriptHandle::new(5), 10);
//! registry.add_listener(NodeEvent::Touch, ScriptHandle::new(6), 1);
//!
//! let order: Vec<i32> = registry
//!     .listeners_for(NodeEvent::Touch)
//!     .iter()
//!     .map(|entry| entry.callback.raw())
//!     .collect();
//! assert_eq!(order, vec![6, 5]);
//! ```

use super::handle::{ListenerId, ScriptHandle};
use super::kind::NodeEvent;
use crate::config::DispatcherConfig;
use crate::core::error::{DispatcherError, DispatcherResult, ScriptError, ScriptResult};
use crate::core::logging::LOG_TARGET;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单个监听器记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerEntry {
    /// 注册时分配的标识
    pub id: ListenerId,
    /// 脚本回调
    pub callback: ScriptHandle,
    /// 优先级，数值越小越先分发
    pub priority: i32,
}

/// 事件到有序监听器列表的映射
pub type ListenerTable = BTreeMap<NodeEvent, Vec<ListenerEntry>>;

/// 一次分发的结果
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DispatchReport {
    /// 被调用的监听器数量（包括失败的）
    pub invoked: usize,
    /// 执行失败的监听器
    pub failures: Vec<(ListenerId, ScriptError)>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 注册表的可序列化快照，用于调试和检查
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub default_priority: i32,
    pub listeners: ListenerTable,
}

/// 脚本事件监听器注册表
///
/// 只存储数据，不驱动任何计时逻辑；每帧调度由拥有者通过
/// [`ScriptEventDispatcher`](super::dispatcher::ScriptEventDispatcher) 接入。
#[derive(Debug, Clone)]
pub struct ScriptEventRegistry {
    listeners: ListenerTable,
    next_id: u64,
    default_priority: i32,
}

impl Default for ScriptEventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptEventRegistry {
    /// 创建空注册表，默认优先级为0
    pub fn new() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_id: 1,
            default_priority: 0,
        }
    }

    /// 使用配置创建注册表
    pub fn with_config(config: &DispatcherConfig) -> Self {
        Self {
            default_priority: config.default_priority,
            ..Self::new()
        }
    }

    pub fn default_priority(&self) -> i32 {
        self.default_priority
    }

    /// 注册监听器
    ///
    /// 新条目插入到所有优先级 `<= priority` 的条目之后，因此同优先级保持注册顺序。
    /// 同一个回调可以对同一事件重复注册，每次都会得到新的 [`ListenerId`]。
    pub fn add_listener(
        &mut self,
        event: NodeEvent,
        callback: ScriptHandle,
        priority: i32,
    ) -> ListenerId {
        let id = ListenerId::from_raw(self.next_id);
        self.next_id += 1;

        let entries = self.listeners.entry(event).or_default();
        let index = entries.partition_point(|entry| entry.priority <= priority);
        entries.insert(
            index,
            ListenerEntry {
                id,
                callback,
                priority,
            },
        );

        tracing::debug!(
            target: LOG_TARGET,
            %event,
            %callback,
            priority,
            %id,
            "Script event listener added"
        );
        id
    }

    /// 使用默认优先级注册监听器
    pub fn add_listener_default(&mut self, event: NodeEvent, callback: ScriptHandle) -> ListenerId {
        self.add_listener(event, callback, self.default_priority)
    }

    /// 移除单个监听器
    ///
    /// 事件或标识不存在时返回 [`DispatcherError::ListenerNotFound`]，注册表保持不变。
    pub fn remove_listener(
        &mut self,
        event: NodeEvent,
        id: ListenerId,
    ) -> DispatcherResult<ListenerEntry> {
        let not_found = || DispatcherError::ListenerNotFound { event, id };

        let entries = self.listeners.get_mut(&event).ok_or_else(not_found)?;
        let index = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(not_found)?;
        let removed = entries.remove(index);

        if entries.is_empty() {
            self.listeners.remove(&event);
        }

        tracing::debug!(target: LOG_TARGET, %event, %id, "Script event listener removed");
        Ok(removed)
    }

    /// 移除某个事件的全部监听器，返回移除数量
    pub fn remove_all_for_event(&mut self, event: NodeEvent) -> usize {
        let removed = self.listeners.remove(&event).map_or(0, |entries| entries.len());
        if removed > 0 {
            tracing::debug!(target: LOG_TARGET, %event, removed, "Script event listeners cleared");
        }
        removed
    }

    /// 移除所有事件的全部监听器，返回移除数量
    pub fn remove_all(&mut self) -> usize {
        let removed = self.total_listener_count();
        self.listeners.clear();
        if removed > 0 {
            tracing::debug!(target: LOG_TARGET, removed, "All script event listeners cleared");
        }
        removed
    }

    pub fn has_listener(&self, event: NodeEvent) -> bool {
        self.listeners
            .get(&event)
            .is_some_and(|entries| !entries.is_empty())
    }

    /// 按分发顺序返回某个事件的监听器（借用注册表内部数据，不复制）
    pub fn listeners_for(&self, event: NodeEvent) -> &[ListenerEntry] {
        self.listeners.get(&event).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 完整的监听器表
    pub fn all_listeners(&self) -> &ListenerTable {
        &self.listeners
    }

    pub fn listener_count(&self, event: NodeEvent) -> usize {
        self.listeners_for(event).len()
    }

    pub fn total_listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// 按优先级顺序把事件交给脚本桥执行
    ///
    /// 单个监听器失败只记录在报告中，不会中断后续监听器。
    pub fn dispatch<F>(&self, event: NodeEvent, mut invoke: F) -> DispatchReport
    where
        F: FnMut(&ListenerEntry) -> ScriptResult<()>,
    {
        let mut report = DispatchReport::default();
        for entry in self.listeners_for(event) {
            report.invoked += 1;
            if let Err(err) = invoke(entry) {
                tracing::warn!(
                    target: LOG_TARGET,
                    %event,
                    id = %entry.id,
                    callback = %entry.callback,
                    error = %err,
                    "Script event listener failed"
                );
                report.failures.push((entry.id, err));
            }
        }
        tracing::trace!(target: LOG_TARGET, %event, invoked = report.invoked, "Script event dispatched");
        report
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            default_priority: self.default_priority,
            listeners: self.listeners.clone(),
        }
    }
}
