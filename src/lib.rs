//! Gantry: mirrors a single repository's issue tracker into a local store of
//! schedulable tasks and serves that store as Gantt-chart-ready data.
//!
//! The core of the crate is the synchronization engine: it paginates through
//! a remote issue feed, extracts scheduling metadata embedded as keyword
//! lines inside free-text issue bodies, upserts the result into a keyed task
//! store, and tombstones records that disappeared from the feed since the
//! last pass.
//!
//! # Architecture
//!
//! Gantry follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, feed fixtures)
//!
//! # Modules
//!
//! - [`sync`]: Issue-feed synchronization and the persisted task mirror
//! - [`chart`]: Read-only projection of stored tasks into the display shape
//! - [`app`]: The facade the HTTP serving layer calls
//! - [`config`]: Process configuration read once at startup

pub mod app;
pub mod chart;
pub mod config;
pub mod sync;
