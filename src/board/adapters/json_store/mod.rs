//! JSON document-file adapters for work item persistence.
//!
//! Mirrors a local-storage style backing: the whole board is one JSON
//! array, read and rewritten on each mutation through a capability-scoped
//! directory handle.

mod repository;

pub use repository::JsonStoreWorkItemRepository;
