//! Explicit registry example for static-event-registry.
//!
//! Instead of the process-wide instance, the composition root owns a
//! `StaticEventManager` and hands references to the components that need it.
//! A trace callback reports every registry operation.
//!
//! Run with: `cargo run --example explicit_registry`

use static_event_registry::{StaticEventCollection, StaticEventManager};

struct Mailer<'a> {
    events: &'a StaticEventManager,
}

impl Mailer<'_> {
    fn subscribe(&self) {
        self.events
            .attach(
                ["Shop\\Order", "Shop\\Refund"],
                "completed",
                |e| {
                    println!("   [mailer] notify customer about {:?}", e.target());
                    None
                },
                500,
            )
            .expect("attach mailer");
    }
}

struct Audit<'a> {
    events: &'a StaticEventManager,
}

impl Audit<'_> {
    fn subscribe(&self) {
        self.events
            .attach_default("Shop\\Order", "completed", |e| {
                println!("   [audit] record {:?}", e.name());
                None
            })
            .expect("attach audit");
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    println!("=== static-event-registry: Explicit Registry ===\n");

    let events: StaticEventManager = StaticEventManager::new();
    events.set_trace_callback(|e| println!("   [trace] {e}"));

    Mailer { events: &events }.subscribe();
    Audit { events: &events }.subscribe();

    println!("\nOrder completed:");
    if let Some(queue) = events.handlers("Shop\\Order", "completed") {
        let event = static_event_registry::Event::new("completed").with_target("Shop\\Order");
        for handle in &queue {
            handle.call(&event);
        }
    }

    println!("\nRefund handlers only:");
    events.clear_handlers("Shop\\Order", None);
    println!("   identifiers: {:?}", events.identifiers());

    events.clear_trace_callback();
}
