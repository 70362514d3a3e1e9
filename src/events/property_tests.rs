//! 注册表属性测试
//!
//! 使用proptest验证排序与移除的不变量

#[cfg(test)]
mod tests {
    use crate::events::{NodeEvent, ScriptEventRegistry, ScriptHandle};
    use proptest::prelude::*;

    fn node_event() -> impl Strategy<Value = NodeEvent> {
        prop::sample::select(NodeEvent::ALL.to_vec())
    }

    // 小范围优先级，保证经常出现相同优先级
    fn registration() -> impl Strategy<Value = (NodeEvent, i32, i32)> {
        (node_event(), any::<i32>(), -5i32..5)
    }

    proptest! {
        #[test]
        fn added_entry_is_listed(
            event in node_event(),
            callback in any::<i32>(),
            priority in any::<i32>()
        ) {
            let mut registry = ScriptEventRegistry::new();
            let id = registry.add_listener(event, ScriptHandle::new(callback), priority);

            let entries = registry.listeners_for(event);
            prop_assert_eq!(entries.len(), 1);
            prop_assert_eq!(entries[0].id, id);
            prop_assert_eq!(entries[0].callback.raw(), callback);
            prop_assert_eq!(entries[0].priority, priority);
        }

        #[test]
        fn entries_sorted_and_stable(registrations in prop::collection::vec(registration(), 0..64)) {
            let mut registry = ScriptEventRegistry::new();
            for (event, callback, priority) in &registrations {
                registry.add_listener(*event, ScriptHandle::new(*callback), *priority);
            }

            for event in NodeEvent::ALL {
                // 期望顺序：稳定排序后的注册序列
                let mut expected: Vec<(i32, i32)> = registrations
                    .iter()
                    .filter(|(e, _, _)| *e == event)
                    .map(|(_, callback, priority)| (*callback, *priority))
                    .collect();
                expected.sort_by_key(|(_, priority)| *priority);

                let actual: Vec<(i32, i32)> = registry
                    .listeners_for(event)
                    .iter()
                    .map(|entry| (entry.callback.raw(), entry.priority))
                    .collect();
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn remove_each_returned_id_empties_registry(
            registrations in prop::collection::vec(registration(), 1..32)
        ) {
            let mut registry = ScriptEventRegistry::new();
            let ids: Vec<_> = registrations
                .iter()
                .map(|(event, callback, priority)| {
                    (*event, registry.add_listener(*event, ScriptHandle::new(*callback), *priority))
                })
                .collect();

            for (event, id) in ids.iter().rev() {
                prop_assert!(registry.remove_listener(*event, *id).is_ok());
            }
            for event in NodeEvent::ALL {
                prop_assert!(!registry.has_listener(event));
            }
            prop_assert_eq!(registry.total_listener_count(), 0);
        }

        #[test]
        fn remove_all_for_event_leaves_others(
            registrations in prop::collection::vec(registration(), 0..32),
            target in node_event()
        ) {
            let mut registry = ScriptEventRegistry::new();
            for (event, callback, priority) in &registrations {
                registry.add_listener(*event, ScriptHandle::new(*callback), *priority);
            }
            let before = registry.all_listeners().clone();

            registry.remove_all_for_event(target);

            prop_assert!(!registry.has_listener(target));
            for event in NodeEvent::ALL.into_iter().filter(|e| *e != target) {
                prop_assert_eq!(
                    registry.listeners_for(event),
                    before.get(&event).map(Vec::as_slice).unwrap_or(&[])
                );
            }
        }
    }
}
