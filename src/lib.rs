//! # Static Event Registry
//!
//! A thread-safe, globally addressable registry of event handlers keyed by
//! identifier.
//!
//! Producers raise events under an identifier (typically a component or type
//! name); consumers attach priority-ordered callbacks to those events without
//! either side holding a reference to the other. Each identifier owns one
//! per-identifier event manager (the *delegate*), created on first attach.
//!
//! ## Quick Start
//!
//! ```rust
//! use static_event_registry::{Event, StaticEventCollection, StaticEventManager};
//!
//! let registry: StaticEventManager = StaticEventManager::new();
//!
//! // Attach one callback to the same event of two components
//! let handles = registry
//!     .attach(["My\\AbstractResource", "My\\EntityResource"], "getOne", |e| {
//!         println!("getOne raised by {:?}", e.target());
//!         None
//!     }, 100)
//!     .unwrap();
//!
//! let queue = registry.handlers("My\\EntityResource", "getOne").unwrap();
//! for handle in &queue {
//!     handle.call(&Event::new("getOne").with_target("My\\EntityResource"));
//! }
//!
//! assert!(registry.detach("My\\AbstractResource", &handles[0]));
//! assert!(registry.handlers("Unknown", "getOne").is_none());
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: one mutex guards each registry's identifier map
//! - **Explicit absence**: unknown identifiers yield `None`/`false`, never an empty stand-in
//! - **Global or owned**: use [`get_instance`] or construct [`StaticEventManager`] yourself
//! - **Tracing support**: optional callback for every registry operation, plus `tracing` logs
//!
//! ## Main Items
//!
//! - [`StaticEventCollection`] - attach / detach / events / handlers / clear_handlers
//! - [`StaticEventManager`] - the default registry
//! - [`get_instance`] / [`reset_instance`] - process-wide instance
//! - [`define_static_events!`] - additional isolated named instances
//! - [`EventCollection`] / [`EventManager`] - per-identifier delegate

mod callback_handler;
mod event_manager;
mod macros;
mod priority_queue;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;

pub use callback_handler::{Callback, CallbackHandler, Event, Response};
pub use event_manager::{EventCollection, EventManager};
pub use priority_queue::PriorityQueue;
pub use registry::{get_instance, reset_instance, InstanceSlot, StaticEventManager};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::{Identifiers, StaticEventCollection, TraceCallback, DEFAULT_PRIORITY};
