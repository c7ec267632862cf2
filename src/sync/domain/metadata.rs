//! Keyword-driven extraction of scheduling metadata from issue bodies.

use super::RemoteLabel;
use chrono::NaiveDate;

/// Calendar format accepted on keyword lines, e.g. `due date: 2026-03-14`.
pub const INTAKE_DATE_FORMAT: &str = "%Y-%m-%d";

/// The four keyword prefixes recognized at the start of a body line.
///
/// Prefixes are configured literals; a line contributes only when the prefix
/// occurs at index 0, never when the same text appears mid-line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Prefix introducing an explicit schedule start date.
    pub start_date: String,
    /// Prefix introducing a due date.
    pub due_date: String,
    /// Prefix naming one of the issue's labels.
    pub label: String,
    /// Prefix introducing a completion fraction.
    pub progress: String,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            start_date: "start date:".to_owned(),
            due_date: "due date:".to_owned(),
            label: "label:".to_owned(),
            progress: "progress:".to_owned(),
        }
    }
}

/// Structured metadata extracted from one issue body.
///
/// Every field is optional: a missing or malformed keyword line leaves its
/// field unset and the caller falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueMetadata {
    /// Explicit schedule start date.
    pub start_date: Option<NaiveDate>,
    /// Due date, mapped to the task end date.
    pub due_date: Option<NaiveDate>,
    /// Name of a matched issue label.
    pub label: Option<String>,
    /// Display colour derived from the matched label, `#`-prefixed and
    /// upper-cased. Set together with [`IssueMetadata::label`] or not at all.
    pub color: Option<String>,
    /// Completion fraction in `[0, 1]`.
    pub progress: Option<f64>,
}

/// Line-by-line keyword scanner over free-text issue bodies.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    keywords: KeywordConfig,
}

impl MetadataExtractor {
    /// Creates an extractor for the given keyword prefixes.
    #[must_use]
    pub const fn new(keywords: KeywordConfig) -> Self {
        Self { keywords }
    }

    /// Scans a body for keyword lines and resolves label references against
    /// the issue's label set.
    ///
    /// The scan is sequential and a later successful match overwrites an
    /// earlier one. Unparseable remainders are discarded without touching the
    /// working value, so a malformed line never clears a previous match and
    /// never aborts the rest of the scan.
    #[must_use]
    pub fn extract(&self, body: Option<&str>, labels: &[RemoteLabel]) -> IssueMetadata {
        let mut metadata = IssueMetadata::default();
        let Some(text) = body else {
            return metadata;
        };

        for line in text.lines() {
            if let Some(rest) = line.strip_prefix(&self.keywords.start_date) {
                if let Some(date) = parse_date(rest) {
                    metadata.start_date = Some(date);
                }
            } else if let Some(rest) = line.strip_prefix(&self.keywords.due_date) {
                if let Some(date) = parse_date(rest) {
                    metadata.due_date = Some(date);
                }
            } else if let Some(rest) = line.strip_prefix(&self.keywords.label) {
                if let Some((name, color)) = resolve_label(rest, labels) {
                    metadata.label = Some(name);
                    metadata.color = Some(color);
                }
            } else if let Some(rest) = line.strip_prefix(&self.keywords.progress) {
                if let Some(fraction) = parse_progress(rest) {
                    metadata.progress = Some(fraction);
                }
            }
        }

        metadata
    }
}

fn parse_date(rest: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(rest.trim(), INTAKE_DATE_FORMAT).ok()
}

/// Resolves a label keyword against the issue's label set.
///
/// The reference is honoured only on an exact case-sensitive name match with
/// a defined colour; name and colour are reported together or not at all.
fn resolve_label(rest: &str, labels: &[RemoteLabel]) -> Option<(String, String)> {
    let name = rest.trim();
    labels
        .iter()
        .find(|label| label.name == name)
        .and_then(|label| {
            label
                .color
                .as_ref()
                .map(|color| (label.name.clone(), format!("#{}", color.to_uppercase())))
        })
}

fn parse_progress(rest: &str) -> Option<f64> {
    rest.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 1.0))
}
