//! Port contracts for the scheduler board.

pub mod completion;
pub mod notifier;
pub mod repository;

pub use completion::CompletionSink;
pub use notifier::BoardNotifier;
pub use repository::{WorkItemRepository, WorkItemRepositoryError, WorkItemRepositoryResult};
