//! Offset-preserving redaction.
//!
//! Edits are applied back to front so that replacing one span never shifts
//! the offsets of spans that still have to be replaced. Overlapping matches
//! are not merged: each edit is applied in turn against the text as it
//! stands at that point, which can leave a partially overwritten
//! placeholder. That output is deterministic and kept as-is.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::types::PiiMatch;
use crate::text::TextIndex;

/// A single replacement of `[start, end)` (character offsets) with
/// `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionEdit {
    /// Start offset in characters.
    pub start: usize,
    /// End offset in characters, exclusive.
    pub end: usize,
    /// Text written over the span.
    pub replacement: String,
}

impl From<&PiiMatch> for RedactionEdit {
    fn from(m: &PiiMatch) -> Self {
        Self { start: m.start, end: m.end, replacement: m.placeholder.clone() }
    }
}

/// Stateless redaction over scan results.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactionEngine;

impl RedactionEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }

    /// Turn matches into edits ordered for application: descending start,
    /// then descending end. Ties keep their input order.
    pub fn plan(&self, matches: &[PiiMatch]) -> Vec<RedactionEdit> {
        let mut edits: Vec<RedactionEdit> = matches.iter().map(RedactionEdit::from).collect();
        sort_back_to_front(&mut edits);
        edits
    }

    /// Replace every match in `text` with its placeholder.
    #[instrument(skip(self, text, matches), fields(text_len = text.len(), matches = matches.len()))]
    pub fn redact(&self, text: &str, matches: &[PiiMatch]) -> String {
        let edits = self.plan(matches);
        apply_sorted(text, &edits)
    }

    /// Apply arbitrary edits to `text`. Edits may be given in any order.
    pub fn apply_edits(&self, text: &str, edits: &[RedactionEdit]) -> String {
        let mut ordered = edits.to_vec();
        sort_back_to_front(&mut ordered);
        apply_sorted(text, &ordered)
    }
}

fn sort_back_to_front(edits: &mut [RedactionEdit]) {
    // slice::sort_by is stable.
    edits.sort_by(|a, b| match b.start.cmp(&a.start) {
        Ordering::Equal => b.end.cmp(&a.end),
        other => other,
    });
}

fn is_disjoint(sorted: &[RedactionEdit]) -> bool {
    sorted.windows(2).all(|pair| pair[1].end <= pair[0].start)
}

fn apply_sorted(text: &str, sorted: &[RedactionEdit]) -> String {
    if sorted.is_empty() {
        return text.to_string();
    }

    if is_disjoint(sorted) {
        splice_disjoint(text, sorted)
    } else {
        debug!(edits = sorted.len(), "overlapping edits, applying sequentially");
        splice_sequential(text, sorted)
    }
}

/// Single forward pass: copy the text between edits and the replacements.
fn splice_disjoint(text: &str, sorted: &[RedactionEdit]) -> String {
    let index = TextIndex::new(text);
    let extra: usize = sorted.iter().map(|e| e.replacement.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);

    let mut cursor = 0;
    for edit in sorted.iter().rev() {
        let span = index.byte_range(edit.start..edit.end);
        let start = span.start.max(cursor);
        out.push_str(&text[cursor..start]);
        out.push_str(&edit.replacement);
        cursor = span.end.max(start);
    }
    out.push_str(&text[cursor..]);
    out
}

/// Apply each edit against the already-edited text, clamping offsets to the
/// current length.
fn splice_sequential(text: &str, sorted: &[RedactionEdit]) -> String {
    let mut current = text.to_string();
    for edit in sorted {
        let span = TextIndex::new(&current).byte_range(edit.start..edit.end);
        current.replace_range(span, &edit.replacement);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::privacy::patterns::PiiCategory;

    fn pii(category: PiiCategory, start: usize, end: usize, placeholder: &str) -> PiiMatch {
        PiiMatch {
            category,
            value: String::new(),
            start,
            end,
            placeholder: placeholder.to_string(),
        }
    }

    /// Validates the plan ordering.
    ///
    /// Assertions:
    /// - Confirms edits are sorted by descending start.
    /// - Confirms equal starts keep input order when ends are equal.
    #[test]
    fn test_plan_orders_back_to_front() {
        let matches = vec![
            pii(PiiCategory::Email, 0, 5, "[EMAIL]"),
            pii(PiiCategory::Phone, 10, 20, "[PHONE]"),
            pii(PiiCategory::Passport, 10, 20, "[PASSPORT]"),
            pii(PiiCategory::Ssn, 6, 9, "[SSN]"),
        ];

        let plan = RedactionEngine::new().plan(&matches);
        let order: Vec<&str> = plan.iter().map(|e| e.replacement.as_str()).collect();
        assert_eq!(order, vec!["[PHONE]", "[PASSPORT]", "[SSN]", "[EMAIL]"]);
    }

    /// Validates that matches given out of order redact correctly.
    #[test]
    fn test_redact_unsorted_matches() {
        let text = "Contact me at jane@example.com or 555-123-4567";
        let matches = vec![
            pii(PiiCategory::Phone, 34, 46, "[PHONE]"),
            pii(PiiCategory::Email, 14, 30, "[EMAIL]"),
        ];

        let redacted = RedactionEngine::new().redact(text, &matches);
        assert_eq!(redacted, "Contact me at [EMAIL] or [PHONE]");
    }

    /// Validates the sequential overlap behavior.
    ///
    /// Assertions:
    /// - Confirms the later edit overwrites the start of the earlier
    ///   placeholder, leaving its tail.
    #[test]
    fn test_overlapping_edits_overwrite() {
        let matches = vec![
            pii(PiiCategory::Passport, 0, 8, "[PASSPORT]"),
            pii(PiiCategory::DriverLicense, 0, 8, "[DRIVER_LICENSE]"),
        ];

        let redacted = RedactionEngine::new().redact("AB123456", &matches);
        assert_eq!(redacted, "[DRIVER_LICENSE]T]");
    }

    /// Validates that empty input and empty match lists are no-ops.
    #[test]
    fn test_redact_noop() {
        let engine = RedactionEngine::new();
        assert_eq!(engine.redact("", &[]), "");
        assert_eq!(engine.redact("nothing here", &[]), "nothing here");
    }

    /// Validates character-offset edits over multi-byte text.
    #[test]
    fn test_apply_edits_multibyte() {
        let edits = vec![RedactionEdit { start: 6, end: 13, replacement: "[EMAIL]".into() }];
        let out = RedactionEngine::new().apply_edits("Café: jo@x.io!", &edits);
        assert_eq!(out, "Café: [EMAIL]!");
    }

    /// Validates that edits past the end of the text are clamped.
    #[test]
    fn test_apply_edits_clamps_out_of_bounds() {
        let edits = vec![RedactionEdit { start: 4, end: 100, replacement: "[X]".into() }];
        let out = RedactionEngine::new().apply_edits("abcdefg", &edits);
        assert_eq!(out, "abcd[X]");
    }
}
