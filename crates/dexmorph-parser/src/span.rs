use std::{fmt, ops::Range};

/// A byte range in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a span covering the 1-based `line` and `column` reported by the
    /// JSON reader.
    ///
    /// The span covers one character when it points inside the source and is
    /// empty when it points at or past the end. Positions are clamped to the
    /// source and snapped back to a character boundary.
    pub fn from_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();
        let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let width = source[offset..].chars().next().map_or(0, char::len_utf8);
        Self::new(offset..offset + width)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Spans built from reader positions always lie inside the source.
    fn check_from_line_column_in_bounds(
        source: &str,
        line: usize,
        column: usize,
    ) -> Result<(), TestCaseError> {
        let span = Span::from_line_column(source, line, column);
        prop_assert!(span.start() <= span.end());
        prop_assert!(span.end() <= source.len());
        prop_assert!(span.len() <= 4);
        prop_assert!(source.is_char_boundary(span.start()));
        prop_assert!(source.is_char_boundary(span.end()));
        Ok(())
    }

    proptest! {
        #[test]
        fn from_line_column_in_bounds(
            source in "[a-zé{}\\[\\]\n ]{0,40}",
            line in 0usize..8,
            column in 0usize..50,
        ) {
            check_from_line_column_in_bounds(&source, line, column)?;
        }
    }
}
