//! Store port for task persistence, lookup, and chart queries.

use crate::sync::domain::{IssueId, Task};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Keyed persistence contract for the task mirror.
///
/// Writes are create-or-replace by issue id: replacing overwrites every
/// field including the tombstone flag, because the incoming record is the
/// full authoritative mirror from the current sync pass.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Creates or replaces one record inside a write transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the write fails; a failed write leaves
    /// the store in its prior state.
    async fn upsert(&self, task: &Task) -> TaskStoreResult<()> {
        self.upsert_all(std::slice::from_ref(task)).await
    }

    /// Creates or replaces a batch of records inside a single write
    /// transaction. The sync engine issues one batch per feed page.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the write fails; no partial upserts
    /// from the failing batch persist.
    async fn upsert_all(&self, tasks: &[Task]) -> TaskStoreResult<()>;

    /// Point lookup by issue id.
    ///
    /// Returns `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the lookup fails.
    async fn find_by_id(&self, id: IssueId) -> TaskStoreResult<Option<Task>>;

    /// Every id currently known to the store, tombstoned or not. Used for
    /// the reconciliation set-difference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the query fails.
    async fn all_ids(&self) -> TaskStoreResult<BTreeSet<IssueId>>;

    /// Tombstones the listed ids inside a single write transaction. Ids not
    /// present in the store are ignored without error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the write fails.
    async fn mark_deleted(&self, ids: &BTreeSet<IssueId>) -> TaskStoreResult<()>;

    /// The chart-eligible subset (not tombstoned, open, end date present) in
    /// the contract order: label ascending, start date descending within a
    /// label group.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the query fails.
    async fn chart_tasks(&self) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),

    /// A stored record could not be mapped back into the domain.
    #[error("stored record invalid: {0}")]
    InvalidRecord(String),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
