//! Diagnostics data passed across the ports

use piiguard_common::privacy::patterns::PiiMatch;
use piiguard_domain::constants::{
    DIAGNOSTIC_CODE_PREFIX, DIAGNOSTIC_MESSAGE_PREFIX, DIAGNOSTIC_SOURCE,
};
use piiguard_domain::{DiagnosticSeverity, TextRange};
use serde::{Deserialize, Serialize};

/// A scan match located in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMatch {
    /// Engine match with absolute character offsets.
    pub pii: PiiMatch,
    /// The same span as line/character positions.
    pub range: TextRange,
}

impl DocumentMatch {
    /// Hover text shown on a highlighted match.
    pub fn hover_message(&self) -> String {
        hover_message(&self.pii)
    }
}

/// Hover text for a highlighted match: its category and the placeholder a
/// redaction would insert.
pub fn hover_message(pii: &PiiMatch) -> String {
    format!(
        "**PII Detection**\n\nType: {}\n\nClick to redact: `{}`",
        pii.category, pii.placeholder
    )
}

/// A published diagnostic for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiDiagnostic {
    /// Span of the match.
    pub range: TextRange,
    /// `Potential PII detected: <description>`.
    pub message: String,
    /// Configured severity.
    pub severity: DiagnosticSeverity,
    /// `pii-<category>`.
    pub code: String,
    /// Always `piiguard`.
    pub source: String,
}

impl PiiDiagnostic {
    /// Build the diagnostic for `found`, described by its pattern's
    /// human-readable `description`.
    pub fn for_match(found: &DocumentMatch, description: &str, severity: DiagnosticSeverity) -> Self {
        Self {
            range: found.range,
            message: format!("{DIAGNOSTIC_MESSAGE_PREFIX}{description}"),
            severity,
            code: format!("{DIAGNOSTIC_CODE_PREFIX}{}", found.pii.category),
            source: DIAGNOSTIC_SOURCE.to_string(),
        }
    }
}

/// One replacement handed to an [`EditSink`](super::ports::EditSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEdit {
    /// Span to replace.
    pub range: TextRange,
    /// Replacement text.
    pub replacement: String,
}

/// Document lifecycle notifications from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    Opened,
    Changed,
    Saved,
    Closed,
}
