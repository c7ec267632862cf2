//! Application services for chart projection.

mod projector;

pub use projector::{ChartError, ChartProjector, ChartResult};
