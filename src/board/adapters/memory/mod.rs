//! In-memory adapters for the board ports.

mod notifier;
mod repository;

pub use notifier::{NullBoardNotifier, RecordingBoardNotifier, RecordingCompletionSink};
pub use repository::InMemoryWorkItemRepository;
