//! Character offset to line/character position mapping

use piiguard_domain::Position;

/// Line starts of a text, in character offsets.
///
/// Lines are split on `\n`. A `\r` before the newline counts as an ordinary
/// character of its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Index the line starts of `text`.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for (idx, c) in text.chars().enumerate() {
            if c == '\n' {
                line_starts.push(idx + 1);
            }
            len = idx + 1;
        }
        Self { line_starts, len }
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lines; an empty text has one.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of `offset`, clamped to the end of the text.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }

    /// Offset of `position`. A line past the end maps to the end of the text
    /// and a character past the end of its line maps to the line end.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(&start) = self.line_starts.get(position.line) else {
            return self.len;
        };
        let end = match self.line_starts.get(position.line + 1) {
            Some(next) => next - 1,
            None => self.len,
        };
        start + position.character.min(end - start)
    }
}
