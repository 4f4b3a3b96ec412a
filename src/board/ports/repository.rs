//! Repository port for work item persistence.

use crate::board::domain::{WorkItem, WorkItemId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for work item repository operations.
pub type WorkItemRepositoryResult<T> = Result<T, WorkItemRepositoryError>;

/// Work item persistence contract.
///
/// Implementations must preserve insertion order in [`list_all`]: the
/// partition algorithm breaks priority ties by arrival order, and that
/// order must survive a restart.
///
/// [`list_all`]: WorkItemRepository::list_all
#[async_trait]
pub trait WorkItemRepository: Send + Sync {
    /// Returns every stored work item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkItemRepositoryError::Persistence`] when the backing
    /// store cannot be read.
    async fn list_all(&self) -> WorkItemRepositoryResult<Vec<WorkItem>>;

    /// Stores a new work item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkItemRepositoryError::Duplicate`] when the item ID
    /// already exists.
    async fn insert(&self, item: &WorkItem) -> WorkItemRepositoryResult<()>;

    /// Persists changes to an existing work item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkItemRepositoryError::NotFound`] when the item does not
    /// exist, or [`WorkItemRepositoryError::StaleWrite`] when the incoming
    /// revision is not exactly one greater than the stored revision.
    async fn update(&self, item: &WorkItem) -> WorkItemRepositoryResult<()>;

    /// Removes a work item.
    ///
    /// # Errors
    ///
    /// Returns [`WorkItemRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn delete(&self, id: WorkItemId) -> WorkItemRepositoryResult<()>;
}

/// Errors returned by work item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkItemRepositoryError {
    /// A work item with the same identifier already exists.
    #[error("duplicate work item identifier: {0}")]
    Duplicate(WorkItemId),

    /// The work item was not found.
    #[error("work item not found: {0}")]
    NotFound(WorkItemId),

    /// The write carried a revision that does not follow the stored one.
    #[error("stale write for work item {id}: expected revision {expected}, got {actual}")]
    StaleWrite {
        /// Item the write concerned.
        id: WorkItemId,
        /// Revision the store expected next.
        expected: u64,
        /// Revision the write carried.
        actual: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkItemRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
