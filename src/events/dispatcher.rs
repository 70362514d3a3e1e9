//! 节点侧的脚本事件分发能力
//!
//! 引擎节点持有一个 [`ScriptEventRegistry`]，并实现 [`ScriptEventDispatcher`] 把
//! 每帧更新接入宿主调度器。注册表本身不包含任何调度逻辑。

use super::handle::{ListenerId, ScriptHandle};
use super::kind::NodeEvent;
use super::registry::{ListenerEntry, ListenerTable, ScriptEventRegistry};
use crate::core::error::DispatcherResult;
use crate::core::logging::LOG_TARGET;

/// 脚本事件分发器
///
/// 实现者只需提供注册表访问和 `schedule_update_for_node_event`，
/// 其余操作都有默认实现。
///
/// # 示例
///
/// ```rust
/// use node_event_dispatcher::events::{
///     NodeEvent, ScriptEventDispatcher, ScriptEventRegistry, ScriptHandle,
/// };
///
/// #[derive(Default)]
/// struct Sprite {
///     events: ScriptEventRegistry,
///     update_scheduled: bool,
/// }
///
/// impl ScriptEventDispatcher for Sprite {
///     fn event_registry(&self) -> &ScriptEventRegistry {
///         &self.events
///     }
///
///     fn event_registry_mut(&mut self) -> &mut ScriptEventRegistry {
///         &mut self.events
///     }
///
///     fn schedule_update_for_node_event(&mut self) {
///         self.update_scheduled = true;
///     }
/// }
///
/// let mut sprite = Sprite::default();
/// sprite.add_script_event_listener(NodeEvent::EnterFrame, ScriptHandle::new(1), 0);
/// assert!(sprite.update_scheduled);
/// ```
pub trait ScriptEventDispatcher {
    fn event_registry(&self) -> &ScriptEventRegistry;

    fn event_registry_mut(&mut self) -> &mut ScriptEventRegistry;

    /// 把节点接入宿主调度器的每帧更新
    ///
    /// 注册 [`NodeEvent::EnterFrame`] 监听器时调用。
    fn schedule_update_for_node_event(&mut self);

    fn add_script_event_listener(
        &mut self,
        event: NodeEvent,
        callback: ScriptHandle,
        priority: i32,
    ) -> ListenerId {
        let id = self
            .event_registry_mut()
            .add_listener(event, callback, priority);
        if event == NodeEvent::EnterFrame {
            tracing::trace!(target: LOG_TARGET, %id, "Scheduling node update for enter frame listener");
            self.schedule_update_for_node_event();
        }
        id
    }

    fn remove_script_event_listener(
        &mut self,
        event: NodeEvent,
        id: ListenerId,
    ) -> DispatcherResult<ListenerEntry> {
        self.event_registry_mut().remove_listener(event, id)
    }

    fn remove_all_script_event_listeners_for_event(&mut self, event: NodeEvent) -> usize {
        self.event_registry_mut().remove_all_for_event(event)
    }

    fn remove_all_script_event_listeners(&mut self) -> usize {
        self.event_registry_mut().remove_all()
    }

    fn has_script_event_listener(&self, event: NodeEvent) -> bool {
        self.event_registry().has_listener(event)
    }

    fn script_event_listeners_for(&self, event: NodeEvent) -> &[ListenerEntry] {
        self.event_registry().listeners_for(event)
    }

    fn all_script_event_listeners(&self) -> &ListenerTable {
        self.event_registry().all_listeners()
    }
}
