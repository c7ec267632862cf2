//! Adapter implementations of the sync ports.

pub mod memory;
pub mod postgres;
