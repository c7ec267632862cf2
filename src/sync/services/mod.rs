//! Application services for issue synchronization.

mod engine;

pub use engine::{SyncEngine, SyncError, SyncResult, SyncSummary};
