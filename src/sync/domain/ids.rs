//! Identifier types for the sync domain.

use super::SyncDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable remote issue identifier, used as the task primary key.
///
/// Re-syncing the same remote issue always addresses the same record, so the
/// identifier must survive round-trips through persistence unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IssueId(i64);

impl IssueId {
    /// Creates a validated issue identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SyncDomainError::InvalidIssueId`] when the value is not
    /// strictly positive.
    pub const fn new(value: i64) -> Result<Self, SyncDomainError> {
        if value <= 0 {
            return Err(SyncDomainError::InvalidIssueId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
