//! Point-in-time document text with position mapping

use std::sync::Arc;

use piiguard_domain::{Position, TextRange};

use super::line_index::LineIndex;

/// Text of a document at one version, with its line table.
///
/// Cheap to share behind an `Arc`; hosts hand out a new snapshot whenever
/// the text changes instead of mutating an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    text: Arc<str>,
    index: LineIndex,
    version: u64,
}

impl DocumentSnapshot {
    /// Snapshot `text` as `version`.
    pub fn new(text: impl Into<Arc<str>>, version: u64) -> Self {
        let text = text.into();
        let index = LineIndex::new(&text);
        Self { text, index, version }
    }

    /// Full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Host-defined version the snapshot was taken at.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// See [`LineIndex::position_at`].
    pub fn position_at(&self, offset: usize) -> Position {
        self.index.position_at(offset)
    }

    /// See [`LineIndex::offset_at`].
    pub fn offset_at(&self, position: Position) -> usize {
        self.index.offset_at(position)
    }

    /// Range covering the character offsets `start..end`.
    pub fn range_of(&self, start: usize, end: usize) -> TextRange {
        TextRange::new(self.position_at(start), self.position_at(end))
    }

    /// Text covered by `range`.
    pub fn text_in(&self, range: TextRange) -> String {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end);
        self.text.chars().skip(start).take(end.saturating_sub(start)).collect()
    }
}
