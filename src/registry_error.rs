use thiserror::Error;

/// Input rejected by [`StaticEventCollection::attach`](crate::StaticEventCollection::attach).
///
/// Lookups never fail: an unknown identifier is reported as `false` or `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("At least one identifier is required")]
    NoIdentifiers,
    #[error("Identifier must not be blank")]
    BlankIdentifier,
    #[error("Event name must not be blank")]
    BlankEvent,
}
