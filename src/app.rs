//! Boundary facade for the HTTP serving layer.
//!
//! The server itself is an external collaborator; this module is the
//! contract it calls into. Each method maps to one route: [`App::chart_data`]
//! to `GET /data`, [`App::refresh`] to `GET /refreshData`, and
//! [`App::issue_url`] to `GET /getIssueURL`. Errors are typed so the serving
//! layer can answer with an explicit failure instead of a silently stale or
//! empty result.

use crate::chart::{ChartData, ChartError, ChartProjector};
use crate::sync::{
    domain::{IssueId, KeywordConfig, MetadataExtractor},
    ports::{IssueFeed, TaskStore, TaskStoreError},
    services::{SyncEngine, SyncError, SyncSummary},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced at the serving boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A sync run failed; already-committed pages remain committed.
    #[error(transparent)]
    Sync(#[from] SyncError),
    /// Chart projection failed.
    #[error(transparent)]
    Chart(#[from] ChartError),
    /// A direct store lookup failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// The requested task id is unknown. Maps to a not-found response.
    #[error("no task found for issue id {0}")]
    TaskNotFound(IssueId),
}

/// Result type for boundary operations.
pub type AppResult<T> = Result<T, AppError>;

/// Wires the injected feed and store into the sync engine and the chart
/// projector, and exposes the three operations the serving layer needs.
pub struct App<F, S>
where
    F: IssueFeed,
    S: TaskStore,
{
    engine: SyncEngine<F, S>,
    projector: ChartProjector<S>,
    store: Arc<S>,
}

impl<F, S> App<F, S>
where
    F: IssueFeed,
    S: TaskStore,
{
    /// Assembles the facade from its collaborators and the configured
    /// keyword prefixes.
    #[must_use]
    pub fn new(feed: Arc<F>, store: Arc<S>, keywords: KeywordConfig) -> Self {
        let engine = SyncEngine::new(feed, Arc::clone(&store), MetadataExtractor::new(keywords));
        let projector = ChartProjector::new(Arc::clone(&store));
        Self {
            engine,
            projector,
            store,
        }
    }

    /// Current chart payload; no remote fetch is performed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Chart`] when the store query fails.
    pub async fn chart_data(&self) -> AppResult<ChartData> {
        Ok(self.projector.project().await?)
    }

    /// Runs one full sync pass, then returns the resulting chart payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Sync`] when the pass aborts; the store keeps
    /// whatever the pass committed before failing.
    pub async fn refresh(&self) -> AppResult<ChartData> {
        self.engine.run().await?;
        Ok(self.projector.project().await?)
    }

    /// Runs one full sync pass and reports its counters, without projecting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Sync`] when the pass aborts.
    pub async fn sync(&self) -> AppResult<SyncSummary> {
        Ok(self.engine.run().await?)
    }

    /// Browser-facing URL of the task mirrored from the given issue id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TaskNotFound`] for unknown ids and
    /// [`AppError::Store`] when the lookup itself fails.
    pub async fn issue_url(&self, id: IssueId) -> AppResult<String> {
        self.store
            .find_by_id(id)
            .await?
            .map(|task| task.html_url)
            .ok_or(AppError::TaskNotFound(id))
    }
}
