//! Document positions, ranges and diagnostic levels

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Zero-based line/character position in a document.
///
/// `character` counts Unicode scalar values from the start of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based character within the line.
    pub character: usize,
}

impl Position {
    /// Position at `line`, `character`.
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line.cmp(&other.line).then(self.character.cmp(&other.character))
    }
}

/// Half-open range between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl TextRange {
    /// Build a range, swapping the ends if they are given in reverse.
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Whether the range covers nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `position` falls inside the range.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }
}

/// Severity attached to published PII diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Hint,
    Information,
    #[default]
    Warning,
    Error,
}

crate::impl_domain_status_conversions!(DiagnosticSeverity {
    Hint => "hint",
    Information => "information",
    Warning => "warning",
    Error => "error",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }

    #[test]
    fn test_range_normalizes_reversed_ends() {
        let range = TextRange::new(Position::new(3, 1), Position::new(1, 0));
        assert_eq!(range.start, Position::new(1, 0));
        assert!(range.contains(Position::new(2, 50)));
        assert!(!range.contains(Position::new(3, 1)));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_severity_text_forms() {
        assert_eq!(DiagnosticSeverity::default(), DiagnosticSeverity::Warning);
        assert_eq!(DiagnosticSeverity::Information.to_string(), "information");
        assert_eq!("Error".parse::<DiagnosticSeverity>().unwrap(), DiagnosticSeverity::Error);

        let json = serde_json::to_string(&DiagnosticSeverity::Hint).unwrap();
        assert_eq!(json, "\"hint\"");
    }
}
