//! Character/byte offset indexing for UTF-8 text
//!
//! Public offsets throughout PiiGuard are character (Unicode scalar) indices,
//! while the regex engine reports byte spans. [`TextIndex`] converts between
//! the two. ASCII text skips the boundary table entirely.

use std::ops::Range;

/// Maps character offsets to byte offsets (and back) for a single text.
#[derive(Debug, Clone)]
pub struct TextIndex {
    byte_len: usize,
    /// Byte offset of every char boundary, including the final `byte_len`.
    /// `None` when the text is pure ASCII.
    boundaries: Option<Vec<usize>>,
}

impl TextIndex {
    /// Build an index for `text`.
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self { byte_len: text.len(), boundaries: None };
        }

        let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        boundaries.push(text.len());
        Self { byte_len: text.len(), boundaries: Some(boundaries) }
    }

    /// Number of characters in the indexed text.
    pub fn char_len(&self) -> usize {
        match &self.boundaries {
            Some(boundaries) => boundaries.len() - 1,
            None => self.byte_len,
        }
    }

    /// Byte offset of the character at `char_offset`, clamped to the end of
    /// the text.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        match &self.boundaries {
            Some(boundaries) => boundaries.get(char_offset).copied().unwrap_or(self.byte_len),
            None => char_offset.min(self.byte_len),
        }
    }

    /// Character offset of `byte_offset`. Offsets inside a multi-byte
    /// character resolve to that character; offsets past the end clamp.
    pub fn char_offset(&self, byte_offset: usize) -> usize {
        match &self.boundaries {
            Some(boundaries) => match boundaries.binary_search(&byte_offset) {
                Ok(idx) => idx,
                Err(idx) => idx.saturating_sub(1),
            },
            None => byte_offset.min(self.byte_len),
        }
    }

    /// Clamp a character range to the text and convert it to bytes.
    ///
    /// A reversed range collapses to an empty range at its clamped start.
    pub fn byte_range(&self, chars: Range<usize>) -> Range<usize> {
        let len = self.char_len();
        let start = chars.start.min(len);
        let end = chars.end.clamp(start, len);
        self.byte_offset(start)..self.byte_offset(end)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for text offset indexing.
    use super::*;

    /// Validates the ASCII fast path.
    ///
    /// Assertions:
    /// - Confirms char and byte offsets coincide.
    /// - Confirms out-of-range offsets clamp to the text length.
    #[test]
    fn test_ascii_offsets_are_identity() {
        let index = TextIndex::new("hello world");
        assert_eq!(index.char_len(), 11);
        assert_eq!(index.byte_offset(6), 6);
        assert_eq!(index.char_offset(6), 6);
        assert_eq!(index.byte_offset(99), 11);
    }

    /// Validates conversion across multi-byte characters.
    ///
    /// Assertions:
    /// - Confirms `é` (2 bytes) and `日` (3 bytes) shift byte offsets.
    /// - Confirms byte offsets inside a character resolve to that character.
    #[test]
    fn test_multibyte_offsets() {
        let text = "é日x";
        let index = TextIndex::new(text);
        assert_eq!(index.char_len(), 3);
        assert_eq!(index.byte_offset(1), 2);
        assert_eq!(index.byte_offset(2), 5);
        assert_eq!(index.byte_offset(3), 6);
        assert_eq!(index.char_offset(5), 2);
        assert_eq!(index.char_offset(3), 1);
    }

    /// Validates range clamping.
    ///
    /// Assertions:
    /// - Confirms an out-of-bounds end clamps to the text length.
    /// - Confirms a reversed range collapses to empty.
    #[test]
    fn test_byte_range_clamps() {
        let index = TextIndex::new("añb");
        assert_eq!(index.byte_range(1..10), 1..4);
        assert_eq!(index.byte_range(2..1), 3..3);
        assert_eq!(index.byte_range(7..9), 4..4);
    }
}
