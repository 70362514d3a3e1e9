//! # Node Event Dispatcher
//!
//! Script event listener registry for game engine nodes.
//!
//! A scripting bridge subscribes script callbacks to node lifecycle events
//! (enter/exit scene, transitions, cleanup, per-frame update, touch). Each
//! event keeps its listeners ordered by priority, lower values first.
//!
//! ## Example
//!
//! ```rust
//! use node_event_dispatcher::events::{NodeEvent, ScriptEventRegistry, ScriptHandle};
//!
//! let mut registry = ScriptEventRegistry::new();
//! let id = registry.add_listener(NodeEvent::Enter, ScriptHandle::new(12), 0);
//! assert!(registry.has_listener(NodeEvent::Enter));
//!
//! registry.remove_listener(NodeEvent::Enter, id).unwrap();
//! assert!(!registry.has_listener(NodeEvent::Enter));
//! ```
//!
//! ## Modules
//!
//! - [`events`]: Event kinds, handles, the registry and the dispatcher trait
//! - [`config`]: Configuration loading
//! - [`core`]: Errors and logging

/// Configuration system
pub mod config;
/// Error types and logging initialization
pub mod core;
/// Script event registration and dispatch
pub mod events;

pub use crate::config::{ConfigError, DispatcherConfig};
pub use crate::core::{DispatcherError, DispatcherResult, ScriptError, ScriptResult};
pub use crate::events::{
    ListenerEntry, ListenerId, NodeEvent, ScriptEventDispatcher, ScriptEventRegistry, ScriptHandle,
};
