//! Integration tests for the process-wide registry.
//!
//! NOTE: All tests use #[serial] because they share the crate-level instance.
//! Each test resets it first so state never leaks between tests.

use serial_test::serial;
use static_event_registry::{
    get_instance, reset_instance, Event, Response, StaticEventCollection,
};
use std::sync::Arc;

fn answer(value: &'static str) -> impl Fn(&Event) -> Option<Response> + Send + Sync + 'static {
    move |_| Some(Arc::new(value) as Response)
}

fn answers(id: &str, event: &str) -> Vec<&'static str> {
    get_instance()
        .handlers(id, event)
        .unwrap()
        .iter()
        .filter_map(|h| h.call(&Event::new(event).with_target(id)))
        .filter_map(|r| r.downcast_ref::<&'static str>().copied())
        .collect()
}

#[test]
#[serial]
fn test_repeated_get_instance_shares_state() {
    reset_instance();

    get_instance().attach("A", "ev", answer("a"), 1).unwrap();

    assert!(Arc::ptr_eq(&get_instance(), &get_instance()));
    assert_eq!(get_instance().events("A"), Some(vec!["ev".to_string()]));
}

#[test]
#[serial]
fn test_reset_gives_empty_identifier_set() {
    reset_instance();
    get_instance().attach(["A", "B"], "ev", answer("x"), 1).unwrap();

    reset_instance();

    assert!(get_instance().identifiers().is_empty());
    assert_eq!(get_instance().events("A"), None);
}

#[test]
#[serial]
fn test_attach_to_many_identifiers() {
    reset_instance();

    get_instance()
        .attach(vec!["A", "B"], "ev", answer("shared"), 1000)
        .unwrap();

    assert!(get_instance().events("A").unwrap().contains(&"ev".to_string()));
    assert!(get_instance().events("B").unwrap().contains(&"ev".to_string()));
    assert_eq!(answers("A", "ev"), vec!["shared"]);
    assert_eq!(answers("B", "ev"), vec!["shared"]);
}

#[test]
#[serial]
fn test_handlers_wrap_attached_callback() {
    reset_instance();

    let handles = get_instance()
        .attach("A", "ev", answer("wrapped"), 5)
        .unwrap();

    let queue = get_instance().handlers("A", "ev").unwrap();
    assert_eq!(queue.len(), 1);
    assert!(queue.contains(&handles[0]));
    assert_eq!(answers("A", "ev"), vec!["wrapped"]);
}

#[test]
#[serial]
fn test_handlers_follow_priority() {
    reset_instance();
    let registry = get_instance();

    registry.attach_default("A", "save", answer("default")).unwrap();
    registry.attach("A", "save", answer("audit"), 5000).unwrap();
    registry.attach("A", "save", answer("validate"), 1).unwrap();
    registry.attach("A", "save", answer("default-2"), 1000).unwrap();

    assert_eq!(
        answers("A", "save"),
        vec!["validate", "default", "default-2", "audit"]
    );
}

#[test]
#[serial]
fn test_detach_unknown_identifier() {
    reset_instance();

    let handles = get_instance().attach("A", "ev", answer("a"), 1).unwrap();

    assert!(!get_instance().detach("unknown-id", &handles[0]));
    assert!(get_instance().detach("A", &handles[0]));
    assert!(!get_instance().detach("A", &handles[0]));
    assert_eq!(get_instance().events("A"), Some(Vec::new()));
}

#[test]
#[serial]
fn test_clear_whole_identifier() {
    reset_instance();
    let registry = get_instance();

    registry.attach("A", "save", answer("s"), 1).unwrap();
    registry.attach("A", "load", answer("l"), 1).unwrap();

    assert!(registry.clear_handlers("A", None));
    assert_eq!(registry.events("A"), None);
    assert!(!registry.contains("A"));
    assert!(!registry.clear_handlers("A", None));
}

#[test]
#[serial]
fn test_clear_single_event() {
    reset_instance();
    let registry = get_instance();

    registry.attach("A", "save", answer("s"), 1).unwrap();
    registry.attach("A", "load", answer("l"), 1).unwrap();

    assert!(registry.clear_handlers("A", Some("save")));
    assert_eq!(registry.events("A"), Some(vec!["load".to_string()]));
    assert_eq!(answers("A", "load"), vec!["l"]);
    assert!(!registry.clear_handlers("A", Some("save")));
    assert!(!registry.clear_handlers("unknown-id", Some("load")));
}

#[test]
#[serial]
fn test_unknown_identifier_is_not_empty_collection() {
    reset_instance();
    get_instance().attach("A", "save", answer("s"), 1).unwrap();

    assert!(get_instance().handlers("unknown-id", "ev").is_none());

    let known_but_empty = get_instance().handlers("A", "ev").unwrap();
    assert!(known_but_empty.is_empty());
}
