//! Chart projection for Gantry.
//!
//! Read-only transformation of stored tasks into the external calendar
//! display shape. Projection reads the store on demand and performs no
//! remote fetch; it may run concurrently with an in-flight sync and simply
//! reflects whatever the store holds at query time.

pub mod domain;
pub mod services;

pub use domain::{CHART_DATE_FORMAT, ChartData, ChartRow};
pub use services::{ChartError, ChartProjector, ChartResult};

#[cfg(test)]
mod tests;
