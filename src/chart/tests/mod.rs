//! Unit tests for the chart context.
