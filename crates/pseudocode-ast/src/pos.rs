//! Source positions.
//!
//! AST nodes and diagnostics carry a `Pos` with a 1-based line and a
//! 0-based character column, the coordinates editors display.

use text_size::TextSize;

/// A position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    /// 1-based line number.
    pub line: u32,
    /// 0-based column, counted in characters.
    pub column: u32,
}

impl Pos {
    /// Creates a position.
    #[must_use]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which each line starts. The first entry is always 0.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Builds the index for `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from(offset as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Converts a byte offset into a position.
    ///
    /// Offsets past the end of `text` clamp to the last line.
    #[must_use]
    pub fn pos(&self, text: &str, offset: TextSize) -> Pos {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];

        let start = usize::from(line_start).min(text.len());
        let end = usize::from(offset).min(text.len());
        let column = text[start..end].chars().count() as u32;

        Pos::new(line as u32, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let text = "abc def";
        let index = LineIndex::new(text);
        assert_eq!(index.pos(text, 0.into()), Pos::new(1, 0));
        assert_eq!(index.pos(text, 4.into()), Pos::new(1, 4));
    }

    #[test]
    fn test_line_starts_after_newline() {
        let text = "ab\ncd\nef";
        let index = LineIndex::new(text);
        assert_eq!(index.pos(text, 3.into()), Pos::new(2, 0));
        assert_eq!(index.pos(text, 4.into()), Pos::new(2, 1));
        assert_eq!(index.pos(text, 6.into()), Pos::new(3, 0));
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        // The arrow is a three-byte character in one column.
        let text = "x \u{2190} y";
        let index = LineIndex::new(text);
        // Offset 6 is the byte position of `y`.
        assert_eq!(index.pos(text, 6.into()), Pos::new(1, 4));
    }

    #[test]
    fn test_offset_at_end_of_text() {
        let text = "ab\ncd";
        let index = LineIndex::new(text);
        assert_eq!(index.pos(text, 5.into()), Pos::new(2, 2));
    }
}
