//! Remote issue value objects consumed from the feed.

use super::{IssueId, ParseIssueStateError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote issue lifecycle state.
///
/// Closed issues stay in the mirror and are never tombstoned by presence in
/// the feed; `closed` only filters them out of the chart projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue has been closed.
    Closed,
}

impl IssueState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for IssueState {
    type Error = ParseIssueStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseIssueStateError(value.to_owned())),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label attached to a remote issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLabel {
    /// Label name as defined on the tracker.
    pub name: String,
    /// Hex colour code without the leading `#`, when the tracker defines one.
    pub color: Option<String>,
}

impl RemoteLabel {
    /// Creates a label with a defined colour.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: Some(color.into()),
        }
    }

    /// Creates a label without a colour.
    #[must_use]
    pub fn uncolored(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }
}

/// One issue as yielded by a feed page.
///
/// Field names follow the consumed feed contract; the shape is mirrored
/// verbatim into the task record during a sync pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteIssue {
    /// Stable remote identifier.
    pub id: IssueId,
    /// Repository-scoped issue number.
    pub number: u32,
    /// Issue title.
    pub title: String,
    /// Free-text issue body; absent bodies are mirrored as empty strings.
    pub body: Option<String>,
    /// API URL of the issue.
    pub url: String,
    /// Browser-facing URL of the issue.
    pub html_url: String,
    /// Remote lifecycle state.
    pub state: IssueState,
    /// Remote creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Labels attached to the issue.
    pub labels: Vec<RemoteLabel>,
}
