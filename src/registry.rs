//! The concrete static event registry and its process-wide instance.
//!
//! Applications that own a composition root should construct a
//! [`StaticEventManager`] and pass it around. [`get_instance`] and
//! [`reset_instance`] give access to a lazily created global one for code that
//! cannot be handed a reference.
//!
//! # Examples
//!
//! ```
//! use static_event_registry::{get_instance, reset_instance, StaticEventCollection};
//!
//! reset_instance();
//! get_instance()
//!     .attach(["My\\Resource", "My\\Entity"], "getOne", |_| None, 100)
//!     .unwrap();
//!
//! assert_eq!(get_instance().events("My\\Entity"), Some(vec!["getOne".to_string()]));
//! assert_eq!(get_instance().events("Unknown"), None);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::event_manager::{EventCollection, EventManager};
use crate::registry_trait::{StaticEventCollection, TraceCallback};

/// Thread-safe registry of per-identifier event delegates.
///
/// A single mutex guards the identifier map and, through it, every delegate.
pub struct StaticEventManager<D = EventManager> {
    identifiers: Mutex<HashMap<String, D>>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl<D> StaticEventManager<D> {
    pub fn new() -> Self {
        Self {
            identifiers: Mutex::new(HashMap::new()),
            trace: Mutex::new(None),
        }
    }
}

impl<D> Default for StaticEventManager<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EventCollection + Default> StaticEventCollection for StaticEventManager<D> {
    type Delegate = D;

    fn trace_slot(&self) -> &Mutex<Option<Arc<TraceCallback>>> {
        &self.trace
    }

    fn identifier_map(&self) -> &Mutex<HashMap<String, D>> {
        &self.identifiers
    }
}

impl<D> fmt::Debug for StaticEventManager<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<String> = self
            .identifiers
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .keys()
            .cloned()
            .collect();
        ids.sort();
        let traced = self
            .trace
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .is_some();

        f.debug_struct("StaticEventManager")
            .field("identifiers", &ids)
            .field("traced", &traced)
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Process-wide instance
// -------------------------------------------------------------------------------------------------

/// Lazily filled slot holding one shared [`StaticEventManager`].
///
/// Used for the crate-level instance and by [`define_static_events!`](crate::define_static_events).
pub struct InstanceSlot {
    name: &'static str,
    slot: Mutex<Option<Arc<StaticEventManager>>>,
}

impl InstanceSlot {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    /// The current instance, created on first access.
    pub fn get(&self) -> Arc<StaticEventManager> {
        self.slot
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get_or_insert_with(|| {
                debug!(slot = self.name, "creating static event registry");
                Arc::new(StaticEventManager::new())
            })
            .clone()
    }

    /// Discard the current instance; the next [`get`](Self::get) starts empty.
    ///
    /// Outstanding `Arc`s keep the old instance alive but it is no longer
    /// reachable through the slot.
    pub fn reset(&self) {
        let previous = self.slot.lock().unwrap_or_else(|p| p.into_inner()).take();
        if previous.is_some() {
            info!(slot = self.name, "static event registry reset");
        }
    }
}

static GLOBAL_INSTANCE: InstanceSlot = InstanceSlot::new("global");

/// Returns the process-wide registry, creating it on the first call.
///
/// Repeated calls without an intervening [`reset_instance`] return the same
/// instance.
pub fn get_instance() -> Arc<StaticEventManager> {
    GLOBAL_INSTANCE.get()
}

/// Discards the process-wide registry.
///
/// Primarily for isolating tests from each other.
pub fn reset_instance() {
    GLOBAL_INSTANCE.reset();
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
