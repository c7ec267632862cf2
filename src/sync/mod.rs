//! Issue-feed synchronization for Gantry.
//!
//! This module mirrors the remote issue tracker into the local task store:
//! paginated fetches through the [`ports::IssueFeed`] contract, per-issue
//! keyword metadata extraction, idempotent upserts keyed on the remote issue
//! identifier, and a single tombstone reconciliation pass once the whole
//! feed has been walked. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
