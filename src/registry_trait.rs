//! Core trait defining static registry behavior.
//!
//! This module provides the `StaticEventCollection` trait with default
//! implementations for attaching, detaching, querying and clearing handlers
//! keyed by identifier.
//!
//! The registry is identifier-based: each identifier owns exactly one delegate
//! (an [`EventCollection`]), created lazily on the first attach and dropped only
//! when the identifier is cleared as a whole.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, trace};

use crate::callback_handler::{Callback, CallbackHandler, Event, Response};
use crate::event_manager::EventCollection;
use crate::priority_queue::PriorityQueue;
use crate::{RegistryError, RegistryEvent};

/// Priority used by [`StaticEventCollection::attach_default`].
pub const DEFAULT_PRIORITY: i32 = 1000;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the
/// registry is interacted with.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// One or more identifiers accepted by `attach`.
///
/// Duplicates are dropped, keeping the first occurrence.
///
/// ```rust
/// use static_event_registry::Identifiers;
///
/// let one = Identifiers::from("My\\Resource");
/// let many = Identifiers::from(["A", "B", "A"]);
///
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.as_slice(), ["A".to_string(), "B".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identifiers(Vec<String>);

impl Identifiers {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self(unique)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Identifiers {
    fn from(id: &str) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<String> for Identifiers {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<&String> for Identifiers {
    fn from(id: &String) -> Self {
        Self(vec![id.clone()])
    }
}

impl From<Vec<String>> for Identifiers {
    fn from(ids: Vec<String>) -> Self {
        Self::new(ids)
    }
}

impl From<Vec<&str>> for Identifiers {
    fn from(ids: Vec<&str>) -> Self {
        Self::new(ids)
    }
}

impl From<&[&str]> for Identifiers {
    fn from(ids: &[&str]) -> Self {
        Self::new(ids.iter().copied())
    }
}

impl From<&[String]> for Identifiers {
    fn from(ids: &[String]) -> Self {
        Self::new(ids.iter().cloned())
    }
}

impl<const N: usize> From<[&str; N]> for Identifiers {
    fn from(ids: [&str; N]) -> Self {
        Self::new(ids)
    }
}

/// Core trait defining static registry behavior.
///
/// Provides default implementations for all registry operations, requiring
/// only two accessor methods (`identifier_map` and `trace_slot`) from the
/// implementor.
///
/// Lookups never fail: an unknown identifier yields `false` or `None`, which
/// keeps "identifier unknown" distinguishable from "identifier known, nothing
/// attached".
pub trait StaticEventCollection {
    /// Per-identifier delegate type.
    type Delegate: EventCollection + Default;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback slot.
    fn trace_slot(&self) -> &Mutex<Option<Arc<TraceCallback>>>;

    /// Set a tracing callback for registry operations.
    ///
    /// Events are emitted after the identifier lock is released, so the
    /// callback may query the registry it is observing.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = self.trace_slot().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    fn clear_trace_callback(&self) {
        let mut guard = self.trace_slot().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Invoke the trace callback, if any, with `event`.
    ///
    /// The callback is cloned out of its slot first, so it runs without any
    /// registry lock held.
    fn emit_event(&self, event: &RegistryEvent) {
        let callback = self
            .trace_slot()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the identifier map.
    fn identifier_map(&self) -> &Mutex<HashMap<String, Self::Delegate>>;

    /// Lock the identifier map, recovering from poisoning.
    fn lock_identifiers(&self) -> MutexGuard<'_, HashMap<String, Self::Delegate>> {
        self.identifier_map()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
    }

    /// Attach `callback` to `event` for every identifier in `ids`.
    ///
    /// Delegates are created on demand. Returns one handle per identifier, in
    /// the order the identifiers were given.
    ///
    /// # Errors
    ///
    /// - `ids` is empty
    /// - an identifier or `event` is empty or whitespace-only
    ///
    /// Nothing is attached when an error is returned. Only `attach` validates
    /// names: the lookup and clear operations accept any string and report an
    /// unknown (e.g. blank) identifier as `None` or `false`.
    fn attach(
        &self,
        ids: impl Into<Identifiers>,
        event: &str,
        callback: impl Fn(&Event) -> Option<Response> + Send + Sync + 'static,
        priority: i32,
    ) -> Result<Vec<CallbackHandler>, RegistryError> {
        self.attach_arc(ids, event, Arc::new(callback), priority)
    }

    /// Like [`attach`](Self::attach), at [`DEFAULT_PRIORITY`].
    fn attach_default(
        &self,
        ids: impl Into<Identifiers>,
        event: &str,
        callback: impl Fn(&Event) -> Option<Response> + Send + Sync + 'static,
    ) -> Result<Vec<CallbackHandler>, RegistryError> {
        self.attach_arc(ids, event, Arc::new(callback), DEFAULT_PRIORITY)
    }

    /// Attach an Arc-wrapped callback.
    ///
    /// Useful when the same callback value is also held elsewhere; every
    /// identifier shares the one `Arc`.
    fn attach_arc(
        &self,
        ids: impl Into<Identifiers>,
        event: &str,
        callback: Arc<Callback>,
        priority: i32,
    ) -> Result<Vec<CallbackHandler>, RegistryError> {
        let ids = ids.into();
        if ids.is_empty() {
            return Err(RegistryError::NoIdentifiers);
        }
        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(RegistryError::BlankIdentifier);
        }
        if event.trim().is_empty() {
            return Err(RegistryError::BlankEvent);
        }

        let handles: Vec<CallbackHandler> = {
            let mut map = self.lock_identifiers();
            ids.iter()
                .map(|id| match map.get_mut(id) {
                    Some(delegate) => delegate.attach(event, callback.clone(), priority),
                    None => {
                        // registered only once the delegate accepted the handler
                        debug!(id, "creating event delegate");
                        let mut delegate = Self::Delegate::default();
                        let handle = delegate.attach(event, callback.clone(), priority);
                        map.insert(id.to_string(), delegate);
                        handle
                    }
                })
                .collect()
        };

        for id in ids.iter() {
            trace!(id, event, priority, "attached handler");
            self.emit_event(&RegistryEvent::Attach {
                id: id.to_string(),
                event: event.to_string(),
                priority,
            });
        }

        Ok(handles)
    }

    /// Detach `handle` from the delegate of `id`.
    ///
    /// Returns `false` if `id` is unknown or the handle is not attached there.
    fn detach(&self, id: &str, handle: &CallbackHandler) -> bool {
        let found = self
            .lock_identifiers()
            .get_mut(id)
            .is_some_and(|delegate| delegate.detach(handle));

        trace!(id, found, handler = handle.id(), "detach");
        self.emit_event(&RegistryEvent::Detach {
            id: id.to_string(),
            found,
        });
        found
    }

    /// Event names registered under `id`, or `None` if `id` is unknown.
    fn events(&self, id: &str) -> Option<Vec<String>> {
        let events = self.lock_identifiers().get(id).map(|d| d.events());

        trace!(id, found = events.is_some(), "events lookup");

        self.emit_event(&RegistryEvent::Events {
            id: id.to_string(),
            found: events.is_some(),
        });
        events
    }

    /// Priority-ordered handles for `event` under `id`.
    ///
    /// `None` means `id` is unknown; a known identifier without handlers for
    /// `event` yields an empty queue.
    fn handlers(&self, id: &str, event: &str) -> Option<PriorityQueue<CallbackHandler>> {
        let handlers = self.lock_identifiers().get(id).map(|d| d.handlers(event));

        trace!(id, event, found = handlers.is_some(), "handlers lookup");

        self.emit_event(&RegistryEvent::Handlers {
            id: id.to_string(),
            event: event.to_string(),
            found: handlers.is_some(),
        });
        handlers
    }

    /// Clear handlers of `id`.
    ///
    /// With `event == None` the whole delegate is dropped and `true` returned.
    /// With `Some(event)` only that event is cleared and the delegate's answer
    /// is returned. Unknown identifiers yield `false`.
    fn clear_handlers(&self, id: &str, event: Option<&str>) -> bool {
        let found = {
            let mut map = self.lock_identifiers();
            match event {
                None => {
                    let removed = map.remove(id).is_some();
                    if removed {
                        debug!(id, "removed event delegate");
                    }
                    removed
                }
                Some(event) => map
                    .get_mut(id)
                    .is_some_and(|delegate| delegate.clear_handlers(event)),
            }
        };

        trace!(id, event, found, "clear handlers");
        self.emit_event(&RegistryEvent::ClearHandlers {
            id: id.to_string(),
            event: event.map(str::to_string),
            found,
        });
        found
    }

    /// Known identifiers, sorted.
    fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lock_identifiers().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Whether a delegate exists for `id`.
    fn contains(&self, id: &str) -> bool {
        self.lock_identifiers().contains_key(id)
    }

    fn is_empty(&self) -> bool {
        self.lock_identifiers().is_empty()
    }

    /// Drop every identifier and its handlers.
    ///
    /// Already-cloned handles stay valid; the tracing callback is kept.
    fn clear(&self) {
        self.lock_identifiers().clear();
        debug!("cleared all event delegates");
        self.emit_event(&RegistryEvent::Clear {});
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
