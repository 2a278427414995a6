use serde::{Deserialize, Serialize};

use crate::error::{MutationError, Result};

/// Byte range of source text targeted by a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }
}

pub(crate) fn check_span(source: &str, span: Span) -> Result<()> {
    if span.start > span.end
        || span.end > source.len()
        || !source.is_char_boundary(span.start)
        || !source.is_char_boundary(span.end)
    {
        return Err(MutationError::RangeOutOfBounds {
            start: span.start,
            end: span.end,
            len: source.len(),
        });
    }
    Ok(())
}

/// Replace exactly `span` in `source` with `replacement`. Every byte
/// outside the span is carried over unchanged.
pub fn replace_range(source: &str, span: Span, replacement: &str) -> Result<String> {
    check_span(source, span)?;
    let mut result = String::with_capacity(source.len() + replacement.len());
    result.push_str(&source[..span.start]);
    result.push_str(replacement);
    result.push_str(&source[span.end..]);
    Ok(result)
}

/// 1-indexed line and column of a byte offset. Columns count bytes within
/// the line, matching tree-sitter positions.
pub fn position(source: &str, byte: usize) -> (usize, usize) {
    let byte = byte.min(source.len());
    let prefix = &source.as_bytes()[..byte];
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    (line, byte - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_middle_of_source() {
        let out = replace_range("if(x > 0){}", Span::new(3, 8), "true").unwrap();
        assert_eq!(out, "if(true){}");
    }

    #[test]
    fn replaces_at_start_and_at_end() {
        assert_eq!(replace_range("abc", Span::new(0, 1), "x").unwrap(), "xbc");
        assert_eq!(replace_range("abc", Span::new(2, 3), "x").unwrap(), "abx");
        assert_eq!(replace_range("abc", Span::new(3, 3), "!").unwrap(), "abc!");
    }

    #[test]
    fn preserves_bytes_outside_the_span() {
        let source = "first\nsecond\nthird\n";
        let span = Span::new(6, 12);
        let out = replace_range(source, span, "SWAPPED").unwrap();
        assert_eq!(&out[..span.start], &source[..span.start]);
        assert_eq!(&out[span.start + "SWAPPED".len()..], &source[span.end..]);
    }

    #[test]
    fn rejects_end_past_source() {
        let err = replace_range("short", Span::new(0, 99), "x").unwrap_err();
        assert!(matches!(
            err,
            MutationError::RangeOutOfBounds { start: 0, end: 99, len: 5 }
        ));
    }

    #[test]
    fn rejects_inverted_span() {
        let err = replace_range("source", Span::new(4, 2), "x").unwrap_err();
        assert!(matches!(err, MutationError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn rejects_span_splitting_a_multibyte_char() {
        // 'é' spans bytes 3..5
        let err = replace_range("café!", Span::new(4, 5), "x").unwrap_err();
        assert!(matches!(err, MutationError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn multibyte_prefix_is_preserved() {
        let source = "var café = 1; if(café > 0){}";
        let start = source.find("café > 0").unwrap();
        let end = start + "café > 0".len();
        let out = replace_range(source, Span::new(start, end), "true").unwrap();
        assert_eq!(out, "var café = 1; if(true){}");
    }

    #[test]
    fn position_counts_lines_and_columns() {
        let source = "ab\ncdef\ng";
        assert_eq!(position(source, 0), (1, 1));
        assert_eq!(position(source, 1), (1, 2));
        assert_eq!(position(source, 3), (2, 1));
        assert_eq!(position(source, 6), (2, 4));
        assert_eq!(position(source, 8), (3, 1));
    }
}
