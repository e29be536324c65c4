//! Shared identifiers example for static-event-registry.
//!
//! A caching layer attaches one callback to the `getOne` event of several
//! resource types at once, without knowing about any resource instance. The
//! resources later look up the handlers registered for their own identifier.
//!
//! Run with: `cargo run --example shared_identifiers`

use static_event_registry::{
    get_instance, reset_instance, Event, Response, StaticEventCollection,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A resource that raises `getOne` before loading from its backing store.
struct Resource {
    identifier: &'static str,
}

impl Resource {
    fn get_one(&self, id: &str) -> String {
        let event = Event::new("getOne")
            .with_target(self.identifier)
            .with_param("id", id);

        // First handler returning a value short-circuits the load
        if let Some(queue) = get_instance().handlers(self.identifier, "getOne") {
            for handle in &queue {
                if let Some(hit) = handle.call(&event) {
                    if let Some(value) = hit.downcast_ref::<String>() {
                        return value.clone();
                    }
                }
            }
        }

        format!("{}#{} (loaded)", self.identifier, id)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("static_event_registry=debug")
        .init();

    println!("=== static-event-registry: Shared Identifiers ===\n");

    reset_instance();

    let cache: Arc<Mutex<HashMap<String, String>>> = Arc::new(Mutex::new(HashMap::new()));
    cache
        .lock()
        .unwrap()
        .insert("My\\EntityResource::7".to_string(), "entity 7 (cached)".to_string());

    let lookup = cache.clone();
    get_instance()
        .attach(
            ["My\\AbstractResource", "My\\EntityResource"],
            "getOne",
            move |e| {
                let key = format!("{}::{}", e.target()?, e.param("id")?);
                let hit = lookup.lock().unwrap().get(&key).cloned()?;
                Some(Arc::new(hit) as Response)
            },
            1000,
        )
        .expect("attach cache lookup");

    let entity = Resource {
        identifier: "My\\EntityResource",
    };
    let other = Resource {
        identifier: "My\\OtherResource",
    };

    println!("{}", entity.get_one("7"));
    println!("{}", entity.get_one("8"));
    println!("{}", other.get_one("7"));

    println!("\nIdentifiers: {:?}", get_instance().identifiers());
}
