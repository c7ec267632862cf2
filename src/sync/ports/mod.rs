//! Port contracts for issue synchronization.
//!
//! Ports define infrastructure-agnostic interfaces used by sync services.

pub mod feed;
pub mod store;

pub use feed::{FeedError, FeedResult, IssueFeed, IssuePage, PageCursor, StateFilter};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
