//! Display-shape domain types for the chart projection.

mod row;

pub use row::{CHART_DATE_FORMAT, ChartData, ChartRow};
