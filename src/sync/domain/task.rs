//! The mirrored task record and its construction rules.

use super::{IssueId, IssueMetadata, IssueState, RemoteIssue};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One schedulable task mirrored from a remote issue.
///
/// The record is the full authoritative mirror produced by the most recent
/// sync pass covering its issue: an upsert overwrites every field, including
/// the tombstone flag, so an issue that reappears is implicitly undeleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Remote issue identifier, the primary key.
    pub id: IssueId,
    /// Mirrored issue title.
    pub title: String,
    /// Mirrored issue body; an absent remote body is stored as `""`.
    pub body: String,
    /// Mirrored API URL.
    pub url: String,
    /// Mirrored browser-facing URL.
    pub html_url: String,
    /// Mirrored repository-scoped issue number.
    pub number: u32,
    /// Mirrored lifecycle state.
    pub state: IssueState,
    /// Remote creation timestamp.
    pub remote_created_at: DateTime<Utc>,
    /// Schedule start: the extracted start date, or the remote creation date
    /// when no keyword overrode it.
    pub start_date: NaiveDate,
    /// Schedule end; present only when a due-date keyword parsed successfully.
    pub end_date: Option<NaiveDate>,
    /// Schedule duration in days.
    pub duration: u16,
    /// Matched label name, set together with [`Task::color`] or not at all.
    pub label: Option<String>,
    /// Display colour for the matched label.
    pub color: Option<String>,
    /// Completion fraction in `[0, 1]`.
    pub progress: Option<f64>,
    /// Tombstone marker set by reconciliation; never a physical delete.
    pub is_deleted: bool,
    /// Task kind, reserved for project/milestone task types.
    pub kind: Option<String>,
    /// Parent task, reserved for hierarchical task types.
    pub parent: Option<IssueId>,
    /// Nesting level, reserved for hierarchical task types.
    pub level: Option<u16>,
    /// Expanded-in-tree flag, reserved for hierarchical task types.
    pub open: Option<bool>,
}

impl Task {
    /// Schedule duration applied when nothing derives a different one.
    pub const DEFAULT_DURATION_DAYS: u16 = 7;

    /// Builds the mirror record for one remote issue.
    ///
    /// Combines the verbatim remote fields with the extracted metadata,
    /// falling back to the issue's own creation date for the schedule start
    /// and to the fixed default duration.
    #[must_use]
    pub fn from_remote(issue: &RemoteIssue, metadata: &IssueMetadata) -> Self {
        Self {
            id: issue.id,
            title: issue.title.clone(),
            body: issue.body.clone().unwrap_or_default(),
            url: issue.url.clone(),
            html_url: issue.html_url.clone(),
            number: issue.number,
            state: issue.state,
            remote_created_at: issue.created_at,
            start_date: metadata
                .start_date
                .unwrap_or_else(|| issue.created_at.date_naive()),
            end_date: metadata.due_date,
            duration: Self::DEFAULT_DURATION_DAYS,
            label: metadata.label.clone(),
            color: metadata.color.clone(),
            progress: metadata.progress,
            is_deleted: false,
            kind: None,
            parent: None,
            level: None,
            open: None,
        }
    }

    /// Whether the task belongs in the chart projection: not tombstoned,
    /// still open remotely, and carrying an end date.
    #[must_use]
    pub fn is_chart_eligible(&self) -> bool {
        !self.is_deleted && self.state == IssueState::Open && self.end_date.is_some()
    }
}

/// Sorts tasks into the chart contract order: label ascending with unlabelled
/// tasks first, then start date descending within each label group.
///
/// Both store adapters route their chart queries through this helper so the
/// ordering observed by consumers never depends on the storage engine. The
/// underlying sort is stable.
pub fn chart_order(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| match a.label.cmp(&b.label) {
        Ordering::Equal => b.start_date.cmp(&a.start_date),
        unequal => unequal,
    });
}
