//! In-memory work item repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{WorkItem, WorkItemId},
    ports::{WorkItemRepository, WorkItemRepositoryError, WorkItemRepositoryResult},
};

/// Thread-safe, order-preserving in-memory work item repository.
///
/// The backing is a plain vector, so `list_all` returns items in insertion
/// order as the repository contract requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkItemRepository {
    state: Arc<RwLock<Vec<WorkItem>>>,
}

impl InMemoryWorkItemRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> WorkItemRepositoryError {
    WorkItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl WorkItemRepository for InMemoryWorkItemRepository {
    async fn list_all(&self) -> WorkItemRepositoryResult<Vec<WorkItem>> {
        let items = self.state.read().map_err(lock_poisoned)?;
        Ok(items.clone())
    }

    async fn insert(&self, item: &WorkItem) -> WorkItemRepositoryResult<()> {
        let mut items = self.state.write().map_err(lock_poisoned)?;
        if items.iter().any(|stored| stored.id() == item.id()) {
            return Err(WorkItemRepositoryError::Duplicate(item.id()));
        }
        items.push(item.clone());
        Ok(())
    }

    async fn update(&self, item: &WorkItem) -> WorkItemRepositoryResult<()> {
        let mut items = self.state.write().map_err(lock_poisoned)?;
        let stored = items
            .iter_mut()
            .find(|stored| stored.id() == item.id())
            .ok_or(WorkItemRepositoryError::NotFound(item.id()))?;

        let expected = stored.revision() + 1;
        if item.revision() != expected {
            return Err(WorkItemRepositoryError::StaleWrite {
                id: item.id(),
                expected,
                actual: item.revision(),
            });
        }

        *stored = item.clone();
        Ok(())
    }

    async fn delete(&self, id: WorkItemId) -> WorkItemRepositoryResult<()> {
        let mut items = self.state.write().map_err(lock_poisoned)?;
        let position = items
            .iter()
            .position(|stored| stored.id() == id)
            .ok_or(WorkItemRepositoryError::NotFound(id))?;
        items.remove(position);
        Ok(())
    }
}
