//! Diesel row model and domain conversions for task persistence.

use super::schema::tasks;
use crate::sync::domain::{IssueId, IssueState, Task};
use crate::sync::ports::{TaskStoreError, TaskStoreResult};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Full task row, used for both queries and create-or-replace writes.
///
/// `treat_none_as_null` matters here: an upsert must overwrite nullable
/// columns with NULL when the incoming mirror has no value, otherwise a
/// removed due date or label would survive the overwrite.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Remote issue identifier.
    pub id: i64,
    /// Mirrored issue title.
    pub title: String,
    /// Mirrored issue body.
    pub body: String,
    /// Mirrored API URL.
    pub url: String,
    /// Mirrored browser-facing URL.
    pub html_url: String,
    /// Repository-scoped issue number.
    pub number: i64,
    /// Remote lifecycle state in canonical storage format.
    pub state: String,
    /// Remote creation timestamp.
    pub remote_created_at: DateTime<Utc>,
    /// Schedule start date.
    pub start_date: NaiveDate,
    /// Schedule end date.
    pub end_date: Option<NaiveDate>,
    /// Schedule duration in days.
    pub duration: i32,
    /// Matched label name.
    pub label: Option<String>,
    /// Display colour for the matched label.
    pub color: Option<String>,
    /// Completion fraction.
    pub progress: Option<f64>,
    /// Tombstone marker.
    pub is_deleted: bool,
    /// Task kind, reserved for project/milestone task types.
    pub kind: Option<String>,
    /// Parent task, reserved for hierarchical task types.
    pub parent: Option<i64>,
    /// Nesting level, reserved for hierarchical task types.
    pub level: Option<i32>,
    /// Expanded-in-tree flag, reserved for hierarchical task types.
    pub open: Option<bool>,
}

/// Maps a domain task to its row representation.
#[must_use]
pub fn task_to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id.value(),
        title: task.title.clone(),
        body: task.body.clone(),
        url: task.url.clone(),
        html_url: task.html_url.clone(),
        number: i64::from(task.number),
        state: task.state.as_str().to_owned(),
        remote_created_at: task.remote_created_at,
        start_date: task.start_date,
        end_date: task.end_date,
        duration: i32::from(task.duration),
        label: task.label.clone(),
        color: task.color.clone(),
        progress: task.progress,
        is_deleted: task.is_deleted,
        kind: task.kind.clone(),
        parent: task.parent.map(IssueId::value),
        level: task.level.map(i32::from),
        open: task.open,
    }
}

/// Maps a persisted row back into the domain.
///
/// # Errors
///
/// Returns [`TaskStoreError::InvalidRecord`] when a stored value no longer
/// fits the domain types (unknown state, out-of-range numerics).
pub fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let id = IssueId::new(row.id).map_err(|err| TaskStoreError::InvalidRecord(err.to_string()))?;
    let number = u32::try_from(row.number)
        .map_err(|_| TaskStoreError::InvalidRecord(format!("issue number {}", row.number)))?;
    let state = IssueState::try_from(row.state.as_str())
        .map_err(|err| TaskStoreError::InvalidRecord(err.to_string()))?;
    let duration = u16::try_from(row.duration)
        .map_err(|_| TaskStoreError::InvalidRecord(format!("duration {}", row.duration)))?;
    let parent = row
        .parent
        .map(|raw| IssueId::new(raw).map_err(|err| TaskStoreError::InvalidRecord(err.to_string())))
        .transpose()?;
    let level = row
        .level
        .map(|raw| {
            u16::try_from(raw).map_err(|_| TaskStoreError::InvalidRecord(format!("level {raw}")))
        })
        .transpose()?;

    Ok(Task {
        id,
        title: row.title,
        body: row.body,
        url: row.url,
        html_url: row.html_url,
        number,
        state,
        remote_created_at: row.remote_created_at,
        start_date: row.start_date,
        end_date: row.end_date,
        duration,
        label: row.label,
        color: row.color,
        progress: row.progress,
        is_deleted: row.is_deleted,
        kind: row.kind,
        parent,
        level,
        open: row.open,
    })
}
