//! Line/column locations of diagnostics.

use std::ops;

/// A location in a commit message.
///
/// `character` counts UTF-16 code units from the start of `line`, matching
/// what editors speaking the Language Server Protocol expect.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based UTF-16 column.
    pub character: u32,
}

impl Position {
    /// Create a position from a line and a UTF-16 column.
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A span between two [`Position`]s, `end` exclusive.
///
/// A zero-width range (`start == end`) marks an insertion point, e.g. where a
/// missing token belongs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Piece together a range.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A single-line range between two UTF-16 columns.
    pub const fn line(line: u32, start: u32, end: u32) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// A zero-width range at the given location.
    pub const fn point(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Whether this range is an insertion point.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Map a byte span of `text`, which sits on `line`, to UTF-16 columns.
    ///
    /// Offsets past the end of `text` are clamped to it.
    pub(crate) fn within(line: u32, text: &str, span: ops::Range<usize>) -> Self {
        let start = utf16_column(text, span.start);
        let end = utf16_column(text, span.end.max(span.start));
        Self::line(line, start, end)
    }

    /// A zero-width range at the byte `offset` of `text`, which sits on `line`.
    pub(crate) fn at(line: u32, text: &str, offset: usize) -> Self {
        Self::within(line, text, offset..offset)
    }
}

fn utf16_column(text: &str, offset: usize) -> u32 {
    let units: usize = text
        .char_indices()
        .take_while(|(i, _)| *i < offset)
        .map(|(_, c)| c.len_utf16())
        .sum();
    u32::try_from(units).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_columns_match_bytes() {
        assert_eq!(Range::within(0, "type(scope)", 5..10), Range::line(0, 5, 10));
        assert_eq!(Range::at(3, "type", 4), Range::line(3, 4, 4));
    }

    #[test]
    fn columns_count_utf16_units() {
        // `é` is two bytes but one UTF-16 unit, `🦀` is four bytes and two units.
        let text = "é🦀(x)";
        assert_eq!(Range::at(0, text, 6), Range::line(0, 3, 3));
        assert_eq!(Range::within(0, text, 0..text.len()), Range::line(0, 0, 6));
    }

    #[test]
    fn clamps_past_the_end() {
        assert_eq!(Range::within(0, "ab", 1..10), Range::line(0, 1, 2));
        assert_eq!(Range::within(0, "ab", 2..1), Range::line(0, 2, 2));
    }

    #[test]
    fn point_is_empty() {
        let range = Range::point(Position::new(1, 2));
        assert!(range.is_empty());
        assert!(!Range::line(0, 0, 1).is_empty());
    }
}
