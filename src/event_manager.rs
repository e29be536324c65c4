//! Per-identifier event manager the static registry delegates to.
//!
//! The registry only needs the five operations of [`EventCollection`]; any
//! type implementing it (plus `Default`) can stand in for [`EventManager`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::callback_handler::{Callback, CallbackHandler};
use crate::priority_queue::PriorityQueue;

/// Contract between the static registry and its per-identifier delegates.
pub trait EventCollection {
    /// Attach `callback` to `event` at `priority`, returning the new handle.
    fn attach(&mut self, event: &str, callback: Arc<Callback>, priority: i32) -> CallbackHandler;

    /// Remove `handle`. Returns `false` if neither its event nor the handle is known.
    fn detach(&mut self, handle: &CallbackHandler) -> bool;

    /// Names of all events with at least one queue entry.
    fn events(&self) -> Vec<String>;

    /// Priority-ordered handles for `event`; empty when the event is unknown.
    fn handlers(&self, event: &str) -> PriorityQueue<CallbackHandler>;

    /// Drop every handle attached to `event`. Returns `false` if it had none.
    fn clear_handlers(&mut self, event: &str) -> bool;
}

/// Default delegate: a map from event name to its handler queue.
#[derive(Debug, Default, Clone)]
pub struct EventManager {
    events: HashMap<String, PriorityQueue<CallbackHandler>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventCollection for EventManager {
    fn attach(&mut self, event: &str, callback: Arc<Callback>, priority: i32) -> CallbackHandler {
        let handle = CallbackHandler::new(event, callback, priority);
        self.events
            .entry(event.to_string())
            .or_default()
            .insert(handle.clone(), priority);
        handle
    }

    fn detach(&mut self, handle: &CallbackHandler) -> bool {
        let Some(queue) = self.events.get_mut(handle.event()) else {
            return false;
        };

        if !queue.remove(handle) {
            return false;
        }

        if queue.is_empty() {
            self.events.remove(handle.event());
        }
        true
    }

    fn events(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().cloned().collect();
        names.sort();
        names
    }

    fn handlers(&self, event: &str) -> PriorityQueue<CallbackHandler> {
        self.events.get(event).cloned().unwrap_or_default()
    }

    fn clear_handlers(&mut self, event: &str) -> bool {
        self.events.remove(event).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback_handler::{Event, Response};

    fn tagged(tag: &'static str) -> Arc<Callback> {
        Arc::new(move |_: &Event| Some(Arc::new(tag) as Response))
    }

    fn tags(queue: &PriorityQueue<CallbackHandler>) -> Vec<&'static str> {
        queue
            .iter()
            .filter_map(|h| h.call(&Event::new(h.event())))
            .filter_map(|r| r.downcast_ref::<&'static str>().copied())
            .collect()
    }

    #[test]
    fn test_attach_orders_handlers_by_priority() {
        let mut manager = EventManager::new();
        manager.attach("save", tagged("default"), 1000);
        manager.attach("save", tagged("first"), 1);
        manager.attach("save", tagged("last"), 5000);

        assert_eq!(tags(&manager.handlers("save")), vec!["first", "default", "last"]);
    }

    #[test]
    fn test_events_lists_attached_names() {
        let mut manager = EventManager::new();
        manager.attach("save", tagged("a"), 1);
        manager.attach("load", tagged("b"), 1);
        manager.attach("save", tagged("c"), 1);

        assert_eq!(manager.events(), vec!["load".to_string(), "save".to_string()]);
    }

    #[test]
    fn test_handlers_for_unknown_event_is_empty() {
        let manager = EventManager::new();
        assert!(manager.handlers("nothing").is_empty());
    }

    #[test]
    fn test_detach_removes_handle_and_empty_event() {
        let mut manager = EventManager::new();
        let keep = manager.attach("save", tagged("keep"), 1);
        let gone = manager.attach("load", tagged("gone"), 1);

        assert!(manager.detach(&gone));
        assert!(!manager.detach(&gone));
        assert_eq!(manager.events(), vec!["save".to_string()]);
        assert!(manager.handlers("save").contains(&keep));
    }

    #[test]
    fn test_detach_foreign_handle_is_false() {
        let mut mine = EventManager::new();
        let mut other = EventManager::new();
        mine.attach("save", tagged("mine"), 1);
        let foreign = other.attach("save", tagged("other"), 1);

        assert!(!mine.detach(&foreign));
        assert_eq!(mine.handlers("save").len(), 1);
    }

    #[test]
    fn test_clear_handlers() {
        let mut manager = EventManager::new();
        manager.attach("save", tagged("a"), 1);
        manager.attach("load", tagged("b"), 1);

        assert!(manager.clear_handlers("save"));
        assert!(!manager.clear_handlers("save"));
        assert_eq!(manager.events(), vec!["load".to_string()]);
    }
}
