//! In-memory adapters for tests and ephemeral deployments.

mod feed;
mod store;

pub use feed::InMemoryIssueFeed;
pub use store::InMemoryTaskStore;
