//! Macros for creating named static event registries.

/// Creates an isolated, lazily created static event registry in its own module.
///
/// The macro generates a module containing:
/// - A hidden [`InstanceSlot`](crate::InstanceSlot) static
/// - `get_instance()` returning the module's shared registry
/// - `reset_instance()` discarding it
///
/// # Examples
///
/// ```rust
/// use static_event_registry::{define_static_events, StaticEventCollection};
///
/// define_static_events!(storage_events);
///
/// storage_events::get_instance()
///     .attach("Cache", "miss", |_| None, 10)
///     .unwrap();
///
/// assert!(storage_events::get_instance().contains("Cache"));
///
/// // The crate-level instance is unaffected
/// assert!(!static_event_registry::get_instance().contains("Cache"));
///
/// storage_events::reset_instance();
/// assert!(storage_events::get_instance().is_empty());
/// ```
#[macro_export]
macro_rules! define_static_events {
    ($name:ident) => {
        pub mod $name {
            use std::sync::Arc;

            // Registry slot for this module (module-private)
            static SLOT: $crate::InstanceSlot = $crate::InstanceSlot::new(stringify!($name));

            /// Returns this module's registry, creating it on the first call.
            pub fn get_instance() -> Arc<$crate::StaticEventManager> {
                SLOT.get()
            }

            /// Discards this module's registry.
            pub fn reset_instance() {
                SLOT.reset()
            }
        }
    };
}
