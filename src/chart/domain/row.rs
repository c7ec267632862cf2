//! Chart row shaping and the fixed display date format.

use crate::sync::domain::Task;
use serde::Serialize;

/// Calendar format used for chart dates. Part of the external contract:
/// consumers parse the formatted value by position.
pub const CHART_DATE_FORMAT: &str = "%d-%m-%Y";

/// One task shaped for the chart consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    /// Remote issue identifier.
    pub id: i64,
    /// Row caption, the mirrored issue title.
    pub text: String,
    /// Formatted schedule start.
    pub start_date: String,
    /// Schedule duration in days.
    pub duration: u16,
    /// Formatted schedule end.
    pub end_date: String,
    /// Browser-facing issue URL.
    pub url: String,
    /// Completion fraction in `[0, 1]`.
    pub progress: Option<f64>,
    /// Row colour derived from the matched label.
    pub color: Option<String>,
}

impl ChartRow {
    /// Shapes one task into its display row.
    ///
    /// Returns `None` for tasks without an end date; the chart query already
    /// excludes those, this only keeps the conversion total.
    #[must_use]
    pub fn from_task(task: &Task) -> Option<Self> {
        let end_date = task.end_date?;
        Some(Self {
            id: task.id.value(),
            text: task.title.clone(),
            start_date: task.start_date.format(CHART_DATE_FORMAT).to_string(),
            duration: task.duration,
            end_date: end_date.format(CHART_DATE_FORMAT).to_string(),
            url: task.html_url.clone(),
            progress: task.progress,
            color: task.color.clone(),
        })
    }
}

/// The chart payload served to the front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Chart rows in contract order.
    pub data: Vec<ChartRow>,
}
