//! Pure read transformation from the task store to the chart payload.

use crate::chart::domain::{ChartData, ChartRow};
use crate::sync::ports::{TaskStore, TaskStoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by chart projection.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The underlying store query failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for chart projection.
pub type ChartResult<T> = Result<T, ChartError>;

/// Projects the chart-eligible subset of the store into the display shape.
#[derive(Clone)]
pub struct ChartProjector<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> ChartProjector<S>
where
    S: TaskStore,
{
    /// Creates a projector over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Produces the current chart payload.
    ///
    /// Row order is the store's contract order; the projection adds no
    /// ordering of its own.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError`] when the store query fails.
    pub async fn project(&self) -> ChartResult<ChartData> {
        let tasks = self.store.chart_tasks().await?;
        let data = tasks.iter().filter_map(ChartRow::from_task).collect();
        Ok(ChartData { data })
    }
}
