//! `PostgreSQL` task store implementation.

use super::{
    models::{TaskRow, row_to_task, task_to_row},
    schema::tasks,
};
use crate::sync::{
    domain::{IssueId, IssueState, Task, chart_order},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn upsert_all(&self, batch: &[Task]) -> TaskStoreResult<()> {
        let rows: Vec<TaskRow> = batch.iter().map(task_to_row).collect();
        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|txn| {
                    for row in &rows {
                        diesel::insert_into(tasks::table)
                            .values(row)
                            .on_conflict(tasks::id)
                            .do_update()
                            .set(row)
                            .execute(txn)?;
                    }
                    Ok(())
                })
                .map_err(TaskStoreError::persistence)
        })
        .await
    }

    async fn find_by_id(&self, id: IssueId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn all_ids(&self) -> TaskStoreResult<BTreeSet<IssueId>> {
        self.run_blocking(|connection| {
            let raw_ids = tasks::table
                .select(tasks::id)
                .load::<i64>(connection)
                .map_err(TaskStoreError::persistence)?;
            raw_ids
                .into_iter()
                .map(|raw| {
                    IssueId::new(raw).map_err(|err| TaskStoreError::InvalidRecord(err.to_string()))
                })
                .collect()
        })
        .await
    }

    async fn mark_deleted(&self, ids: &BTreeSet<IssueId>) -> TaskStoreResult<()> {
        // Single UPDATE statement, atomic on its own; absent ids simply
        // match no rows.
        let raw_ids: Vec<i64> = ids.iter().copied().map(IssueId::value).collect();
        self.run_blocking(move |connection| {
            diesel::update(tasks::table.filter(tasks::id.eq_any(raw_ids)))
                .set(tasks::is_deleted.eq(true))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn chart_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .filter(tasks::is_deleted.eq(false))
                .filter(tasks::state.eq(IssueState::Open.as_str()))
                .filter(tasks::end_date.is_not_null())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            let mut eligible = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskStoreResult<Vec<Task>>>()?;
            chart_order(&mut eligible);
            Ok(eligible)
        })
        .await
    }
}
