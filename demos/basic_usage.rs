//! Basic usage example for static-event-registry.
//!
//! Demonstrates:
//! - Attaching callbacks to the process-wide registry
//! - Querying events and priority-ordered handlers
//! - Detaching a single handle and clearing identifiers
//!
//! Run with: `cargo run --example basic_usage`

use static_event_registry::{get_instance, Event, Response, StaticEventCollection};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== static-event-registry: Basic Usage ===\n");

    let registry = get_instance();

    // -------------------------------------------------------------------------
    // 1. Attach callbacks
    // -------------------------------------------------------------------------
    println!("1. Attaching callbacks to 'Blog\\Post'...");

    registry
        .attach_default("Blog\\Post", "save", |e| {
            println!("   [default] saving post {:?}", e.param("id"));
            None
        })
        .expect("attach save");
    registry
        .attach(
            "Blog\\Post",
            "save",
            |e| {
                println!("   [validate] checking post {:?}", e.param("id"));
                None
            },
            1,
        )
        .expect("attach validation");
    let title_handles = registry
        .attach(
            "Blog\\Post",
            "render",
            |_| Some(Arc::new("<h1>Hello</h1>".to_string()) as Response),
            100,
        )
        .expect("attach render");

    // -------------------------------------------------------------------------
    // 2. Query
    // -------------------------------------------------------------------------
    println!("\n2. Events under 'Blog\\Post': {:?}", registry.events("Blog\\Post"));
    println!("   Events under 'Unknown':    {:?}", registry.events("Unknown"));

    // -------------------------------------------------------------------------
    // 3. Invoke handlers in priority order
    // -------------------------------------------------------------------------
    println!("\n3. Invoking 'save' handlers in priority order...");

    let event = Event::new("save")
        .with_target("Blog\\Post")
        .with_param("id", "42");
    if let Some(queue) = registry.handlers("Blog\\Post", "save") {
        for handle in &queue {
            handle.call(&event);
        }
    }

    // -------------------------------------------------------------------------
    // 4. Detach and clear
    // -------------------------------------------------------------------------
    println!("\n4. Detaching the render handler...");
    let detached = registry.detach("Blog\\Post", &title_handles[0]);
    println!("   detached: {detached}");
    println!("   events now: {:?}", registry.events("Blog\\Post"));

    registry.clear_handlers("Blog\\Post", None);
    println!("   after clearing: {:?}", registry.events("Blog\\Post"));

    println!("\n=== Done ===");
}
