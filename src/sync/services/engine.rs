//! Full-pass synchronization over the issue feed.

use crate::sync::{
    domain::{IssueId, MetadataExtractor, RemoteIssue, Task},
    ports::{FeedError, IssueFeed, StateFilter, TaskStore, TaskStoreError},
};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors surfaced by a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A page fetch failed; the run aborted before reconciliation.
    #[error(transparent)]
    Feed(#[from] FeedError),
    /// A store write or query failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for sync runs.
pub type SyncResult<T> = Result<T, SyncError>;

/// Counters reported by a completed sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Feed pages processed.
    pub pages: usize,
    /// Records upserted (one per issue seen).
    pub upserted: usize,
    /// Records tombstoned by the reconciliation pass.
    pub tombstoned: usize,
}

/// Drives one full synchronization pass: ordered pagination, per-issue
/// metadata extraction and upsert, then a single tombstone reconciliation
/// once the last page has been processed.
///
/// Collaborators are injected; the engine holds no ambient global state. A
/// run lock serializes passes, because the seen-id accounting and the final
/// set-difference are only correct for a single linear walk of the feed.
pub struct SyncEngine<F, S>
where
    F: IssueFeed,
    S: TaskStore,
{
    feed: Arc<F>,
    store: Arc<S>,
    extractor: MetadataExtractor,
    run_lock: Mutex<()>,
}

impl<F, S> SyncEngine<F, S>
where
    F: IssueFeed,
    S: TaskStore,
{
    /// Creates an engine over the given collaborators.
    #[must_use]
    pub fn new(feed: Arc<F>, store: Arc<S>, extractor: MetadataExtractor) -> Self {
        Self {
            feed,
            store,
            extractor,
            run_lock: Mutex::new(()),
        }
    }

    /// Runs one full synchronization pass.
    ///
    /// Pages are processed strictly in feed order, each page's upserts
    /// committed as one batch before the next cursor is requested.
    /// Reconciliation tombstones `all_ids − seen` and runs only after the
    /// final page; an aborted run therefore never tombstones ids it simply
    /// had not reached yet.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] when a page fetch or store write fails. Pages
    /// committed before the failure stay committed; reconciliation is
    /// skipped for the aborted pass. The engine does not retry.
    pub async fn run(&self) -> SyncResult<SyncSummary> {
        let _run_guard = self.run_lock.lock().await;

        let mut seen = BTreeSet::new();
        let mut summary = SyncSummary::default();
        let mut page = self.feed.first_page(StateFilter::All).await?;
        loop {
            self.process_page(&page.items, &mut seen).await?;
            summary.pages += 1;
            summary.upserted += page.items.len();
            match page.next.take() {
                Some(cursor) => page = self.feed.next_page(&cursor).await?,
                None => break,
            }
        }

        let known = self.store.all_ids().await?;
        let stale: BTreeSet<IssueId> = known.difference(&seen).copied().collect();
        self.store.mark_deleted(&stale).await?;
        summary.tombstoned = stale.len();
        Ok(summary)
    }

    /// Mirrors one page into the store as a single batch.
    async fn process_page(
        &self,
        issues: &[RemoteIssue],
        seen: &mut BTreeSet<IssueId>,
    ) -> SyncResult<()> {
        let batch: Vec<Task> = issues
            .iter()
            .map(|issue| {
                let metadata = self.extractor.extract(issue.body.as_deref(), &issue.labels);
                Task::from_remote(issue, &metadata)
            })
            .collect();
        seen.extend(batch.iter().map(|task| task.id));
        self.store.upsert_all(&batch).await?;
        Ok(())
    }
}
