//! Callback handles returned by `attach` and accepted by `detach`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Value a callback may hand back when invoked.
pub type Response = Arc<dyn Any + Send + Sync>;

/// Type alias for an attachable callback.
///
/// Callbacks are shared between every identifier they were attached under, so
/// they must be thread-safe.
pub type Callback = dyn Fn(&Event) -> Option<Response> + Send + Sync + 'static;

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Minimal event payload passed to a callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    name: String,
    target: Option<String>,
    params: HashMap<String, String>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Identifier of the component raising the event.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }
}

/// Opaque token for one attached callback.
///
/// Every handle gets a process-unique id at creation; equality and hashing use
/// only that id, so clones of a handle compare equal while two handles wrapping
/// the same callback do not.
#[derive(Clone)]
pub struct CallbackHandler {
    id: u64,
    event: String,
    priority: i32,
    callback: Arc<Callback>,
}

impl CallbackHandler {
    pub fn new(event: impl Into<String>, callback: Arc<Callback>, priority: i32) -> Self {
        Self {
            id: NEXT_HANDLER_ID.fetch_add(1, Ordering::Relaxed),
            event: event.into(),
            priority,
            callback,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the event this handle was attached to.
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn callback(&self) -> &Arc<Callback> {
        &self.callback
    }

    /// Invoke the wrapped callback once.
    pub fn call(&self, event: &Event) -> Option<Response> {
        (self.callback)(event)
    }
}

impl PartialEq for CallbackHandler {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CallbackHandler {}

impl Hash for CallbackHandler {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for CallbackHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackHandler")
            .field("id", &self.id)
            .field("event", &self.event)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
