//! Thread-safe in-memory task store.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::sync::{
    domain::{IssueId, Task, chart_order},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// In-memory [`TaskStore`] backed by a `HashMap` under a read-write lock.
///
/// Batch writes hold the write guard for the whole batch, so readers never
/// observe a half-applied page and a poisoned batch leaves no partial state
/// behind the guard.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<IssueId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<IssueId, Task>>> {
        self.tasks
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_guard(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<IssueId, Task>>> {
        self.tasks
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn upsert_all(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let mut guard = self.write_guard()?;
        for task in tasks {
            guard.insert(task.id, task.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: IssueId) -> TaskStoreResult<Option<Task>> {
        let guard = self.read_guard()?;
        Ok(guard.get(&id).cloned())
    }

    async fn all_ids(&self) -> TaskStoreResult<BTreeSet<IssueId>> {
        let guard = self.read_guard()?;
        Ok(guard.keys().copied().collect())
    }

    async fn mark_deleted(&self, ids: &BTreeSet<IssueId>) -> TaskStoreResult<()> {
        let mut guard = self.write_guard()?;
        for id in ids {
            if let Some(task) = guard.get_mut(id) {
                task.is_deleted = true;
            }
        }
        Ok(())
    }

    async fn chart_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let guard = self.read_guard()?;
        let mut eligible: Vec<Task> = guard
            .values()
            .filter(|task| task.is_chart_eligible())
            .cloned()
            .collect();
        drop(guard);
        chart_order(&mut eligible);
        Ok(eligible)
    }
}
