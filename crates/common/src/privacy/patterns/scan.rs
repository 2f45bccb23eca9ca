// Scanning enabled detectors over whole documents or selections

use std::sync::Arc;

use tracing::{debug, instrument};

use super::registry::{PatternRegistry, PiiPattern};
use super::types::{EnabledCategories, PiiMatch, ScanRequest};
use crate::text::TextIndex;

/// Runs the enabled detectors of a [`PatternRegistry`] over text.
///
/// Matches are grouped by detector in registry order and, within a detector,
/// ordered left to right. Different detectors are independent, so one span
/// can be reported under several categories.
#[derive(Debug, Clone, Default)]
pub struct ScanEngine {
    registry: Arc<PatternRegistry>,
}

impl ScanEngine {
    /// Engine over an owned registry.
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry: Arc::new(registry) }
    }

    /// Share an existing registry.
    pub fn with_registry(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Registry the engine scans with.
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Scan the whole text.
    pub fn scan_text(&self, text: &str, enabled: &EnabledCategories) -> Vec<PiiMatch> {
        self.scan(&ScanRequest::new(text, enabled))
    }

    /// Scan according to `request`.
    ///
    /// A requested range is clamped to the text. Offsets in the returned
    /// matches are absolute character offsets into `request.text`.
    #[instrument(skip(self, request), fields(text_len = request.text.len(), ranged = request.range.is_some()))]
    pub fn scan(&self, request: &ScanRequest<'_>) -> Vec<PiiMatch> {
        if request.enabled.is_empty() || request.text.is_empty() {
            return Vec::new();
        }

        let index = TextIndex::new(request.text);
        let window = match &request.range {
            Some(range) => index.byte_range(range.clone()),
            None => 0..request.text.len(),
        };
        let haystack = &request.text[window.clone()];

        let mut matches = Vec::new();
        for pattern in self.registry.enabled_patterns(request.enabled) {
            let before = matches.len();
            collect_matches(pattern, haystack, window.start, &index, &mut matches);
            let found = matches.len() - before;
            if found > 0 {
                debug!(category = %pattern.category, found, "pattern matched");
            }
        }

        debug!(total = matches.len(), "scan complete");
        matches
    }
}

fn collect_matches(
    pattern: &PiiPattern,
    haystack: &str,
    byte_base: usize,
    index: &TextIndex,
    out: &mut Vec<PiiMatch>,
) {
    for found in pattern.matcher.find_iter(haystack) {
        // find_iter already steps past empty matches; they carry nothing to
        // redact so they are never reported.
        if found.is_empty() {
            continue;
        }

        out.push(PiiMatch {
            category: pattern.category.clone(),
            value: found.as_str().to_string(),
            start: index.char_offset(byte_base + found.start()),
            end: index.char_offset(byte_base + found.end()),
            placeholder: pattern.placeholder.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::privacy::patterns::PiiCategory;

    fn enabled(ids: &[&str]) -> EnabledCategories {
        ids.iter().copied().collect()
    }

    /// Validates full-text scanning across two categories.
    ///
    /// Assertions:
    /// - Confirms the email match precedes the phone match (registry order).
    /// - Confirms offsets and values are exact.
    #[test]
    fn test_scan_email_and_phone() {
        let engine = ScanEngine::default();
        let text = "Contact me at jane@example.com or 555-123-4567";

        let matches = engine.scan_text(text, &EnabledCategories::all());
        assert_eq!(matches.len(), 2);

        assert_eq!(matches[0].category, PiiCategory::Email);
        assert_eq!(matches[0].value, "jane@example.com");
        assert_eq!((matches[0].start, matches[0].end), (14, 30));
        assert_eq!(matches[0].placeholder, "[EMAIL]");

        assert_eq!(matches[1].category, PiiCategory::Phone);
        assert_eq!(matches[1].value, "555-123-4567");
        assert_eq!((matches[1].start, matches[1].end), (34, 46));
    }

    /// Validates that only enabled categories report.
    #[test]
    fn test_scan_respects_enabled_set() {
        let engine = ScanEngine::default();
        let text = "SSN: 123-45-6789";

        let matches = engine.scan_text(text, &enabled(&["ssn"]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, PiiCategory::Ssn);
        assert_eq!(matches[0].value, "123-45-6789");

        assert!(engine.scan_text(text, &EnabledCategories::none()).is_empty());
        assert!(engine.scan_text(text, &enabled(&["bogus"])).is_empty());
    }

    /// Validates that overlapping detectors both report the same span.
    ///
    /// Assertions:
    /// - Confirms passport precedes driverLicense.
    /// - Confirms both carry offsets 0..8.
    #[test]
    fn test_overlapping_categories_not_deduplicated() {
        let engine = ScanEngine::default();
        let matches = engine.scan_text("AB123456", &enabled(&["passport", "driverLicense"]));

        let summary: Vec<(PiiCategory, usize, usize)> =
            matches.iter().map(|m| (m.category.clone(), m.start, m.end)).collect();
        assert_eq!(
            summary,
            vec![(PiiCategory::Passport, 0, 8), (PiiCategory::DriverLicense, 0, 8)]
        );
    }

    /// Validates range scanning reports absolute offsets.
    ///
    /// Assertions:
    /// - Confirms a match outside the range is not reported.
    /// - Confirms the in-range match offset is `range.start + local index`.
    #[test]
    fn test_range_scan_reports_absolute_offsets() {
        let engine = ScanEngine::default();
        let text = "a@b.io then 10.0.0.1";
        let all = EnabledCategories::all();
        let request = ScanRequest::new(text, &all).with_range(12..20);

        let matches = engine.scan(&request);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, PiiCategory::IpAddress);
        assert_eq!((matches[0].start, matches[0].end), (12, 20));
    }

    /// Validates that out-of-bounds ranges are clamped instead of panicking.
    #[test]
    fn test_range_is_clamped() {
        let engine = ScanEngine::default();
        let all = EnabledCategories::all();
        let text = "ip 192.168.1.1";

        let clamped = engine.scan(&ScanRequest::new(text, &all).with_range(3..500));
        assert_eq!(clamped.len(), 1);

        let reversed = engine.scan(&ScanRequest::new(text, &all).with_range(10..2));
        assert!(reversed.is_empty());
    }

    /// Validates character offsets in text containing multi-byte characters.
    #[test]
    fn test_offsets_are_character_based() {
        let engine = ScanEngine::default();
        let text = "Café: jo@x.io";
        let matches = engine.scan_text(text, &enabled(&["email"]));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "jo@x.io");
        // 'é' is two bytes but one character.
        assert_eq!((matches[0].start, matches[0].end), (6, 13));
    }

    /// Validates that empty matches from a custom detector are skipped.
    #[test]
    fn test_empty_matches_skipped() {
        let registry = PatternRegistry::builder()
            .custom("maybeDigits", r"[0-9]*", "Optional digits", "[DIGITS]")
            .build()
            .expect("pattern should compile");
        let engine = ScanEngine::new(registry);

        let matches = engine.scan_text("ab 42 cd", &enabled(&["maybeDigits"]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "42");
        assert_eq!((matches[0].start, matches[0].end), (3, 5));
    }
}
