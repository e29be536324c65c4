/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use static_event_registry::RegistryEvent;
///
/// let event = RegistryEvent::Detach { id: "Resource".into(), found: false };
/// assert_eq!(event.to_string(), "detach { id: Resource, found: false }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A callback was attached to an event of an identifier.
    Attach {
        id: String,
        event: String,
        priority: i32,
    },

    /// A handle was detached (or not found).
    Detach {
        id: String,
        /// Whether the handle was found and removed
        found: bool,
    },

    /// Event names were requested for an identifier.
    Events { id: String, found: bool },

    /// The handler queue of an event was requested.
    Handlers {
        id: String,
        event: String,
        found: bool,
    },

    /// Handlers were cleared, either for one event or the whole identifier.
    ClearHandlers {
        id: String,
        event: Option<String>,
        found: bool,
    },

    /// Every identifier was dropped from the registry.
    Clear {},
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Attach {
                id,
                event,
                priority,
            } => write!(
                f,
                "attach {{ id: {id}, event: {event}, priority: {priority} }}"
            ),
            RegistryEvent::Detach { id, found } => {
                write!(f, "detach {{ id: {id}, found: {found} }}")
            }
            RegistryEvent::Events { id, found } => {
                write!(f, "events {{ id: {id}, found: {found} }}")
            }
            RegistryEvent::Handlers { id, event, found } => {
                write!(f, "handlers {{ id: {id}, event: {event}, found: {found} }}")
            }
            RegistryEvent::ClearHandlers { id, event, found } => match event {
                Some(event) => write!(
                    f,
                    "clear_handlers {{ id: {id}, event: {event}, found: {found} }}"
                ),
                None => write!(f, "clear_handlers {{ id: {id}, found: {found} }}"),
            },
            RegistryEvent::Clear {} => write!(f, "Clearing the Registry"),
        }
    }
}
