//! Error types for sync domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain sync values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncDomainError {
    /// The remote issue identifier is invalid.
    #[error("invalid issue identifier {0}, expected a positive integer")]
    InvalidIssueId(i64),
}

/// Error returned while parsing issue states from persistence or the feed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue state: {0}")]
pub struct ParseIssueStateError(pub String);
