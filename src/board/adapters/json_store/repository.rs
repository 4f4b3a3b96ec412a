//! Work item repository backed by a single JSON document.

use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

use crate::board::{
    domain::{WorkItem, WorkItemId},
    ports::{WorkItemRepository, WorkItemRepositoryError, WorkItemRepositoryResult},
};

/// Work item repository persisting to one JSON file inside a directory.
///
/// The document is a JSON array, so insertion order survives restarts and
/// priority-tie ordering stays stable. File I/O is synchronous and
/// offloaded to the blocking thread pool; the board serialises mutations,
/// so read-modify-write cycles do not interleave.
#[derive(Clone)]
pub struct JsonStoreWorkItemRepository {
    dir: Arc<Dir>,
    file_name: String,
}

impl JsonStoreWorkItemRepository {
    /// Creates a repository storing items in `file_name` inside `dir`.
    ///
    /// A missing file reads as an empty board; the first write creates it.
    #[must_use]
    pub fn new(dir: Dir, file_name: impl Into<String>) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
        }
    }

    fn read_items(dir: &Dir, file_name: &str) -> WorkItemRepositoryResult<Vec<WorkItem>> {
        match dir.read_to_string(file_name) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(WorkItemRepositoryError::persistence)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(WorkItemRepositoryError::persistence(err)),
        }
    }

    fn write_items(
        dir: &Dir,
        file_name: &str,
        items: &[WorkItem],
    ) -> WorkItemRepositoryResult<()> {
        let payload =
            serde_json::to_string_pretty(items).map_err(WorkItemRepositoryError::persistence)?;
        dir.write(file_name, payload)
            .map_err(WorkItemRepositoryError::persistence)
    }
}

/// Runs a blocking store operation on the blocking thread pool.
async fn run_blocking<F, T>(f: F) -> WorkItemRepositoryResult<T>
where
    F: FnOnce() -> WorkItemRepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(WorkItemRepositoryError::persistence)?
}

#[async_trait]
impl WorkItemRepository for JsonStoreWorkItemRepository {
    async fn list_all(&self) -> WorkItemRepositoryResult<Vec<WorkItem>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || Self::read_items(&dir, &file_name)).await
    }

    async fn insert(&self, item: &WorkItem) -> WorkItemRepositoryResult<()> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let record = item.clone();
        run_blocking(move || {
            let mut items = Self::read_items(&dir, &file_name)?;
            if items.iter().any(|stored| stored.id() == record.id()) {
                return Err(WorkItemRepositoryError::Duplicate(record.id()));
            }
            items.push(record);
            Self::write_items(&dir, &file_name, &items)
        })
        .await
    }

    async fn update(&self, item: &WorkItem) -> WorkItemRepositoryResult<()> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let record = item.clone();
        run_blocking(move || {
            let mut items = Self::read_items(&dir, &file_name)?;
            let stored = items
                .iter_mut()
                .find(|stored| stored.id() == record.id())
                .ok_or(WorkItemRepositoryError::NotFound(record.id()))?;

            let expected = stored.revision() + 1;
            if record.revision() != expected {
                return Err(WorkItemRepositoryError::StaleWrite {
                    id: record.id(),
                    expected,
                    actual: record.revision(),
                });
            }

            *stored = record;
            Self::write_items(&dir, &file_name, &items)
        })
        .await
    }

    async fn delete(&self, id: WorkItemId) -> WorkItemRepositoryResult<()> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || {
            let mut items = Self::read_items(&dir, &file_name)?;
            let position = items
                .iter()
                .position(|stored| stored.id() == id)
                .ok_or(WorkItemRepositoryError::NotFound(id))?;
            items.remove(position);
            Self::write_items(&dir, &file_name, &items)
        })
        .await
    }
}
