//! Domain model for issue synchronization.
//!
//! The sync domain models the remote issue shape consumed from the feed,
//! keyword-driven scheduling metadata extraction, and the mirrored task
//! record, while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod issue;
mod metadata;
mod task;

pub use error::{ParseIssueStateError, SyncDomainError};
pub use ids::IssueId;
pub use issue::{IssueState, RemoteIssue, RemoteLabel};
pub use metadata::{INTAKE_DATE_FORMAT, IssueMetadata, KeywordConfig, MetadataExtractor};
pub use task::{Task, chart_order};
