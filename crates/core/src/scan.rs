//! Span matchers for string literals and comment blocks.
//!
//! Both matchers return byte ranges into the working buffer. Ranges are valid
//! only until the buffer is next mutated; callers must consume them before
//! excising anything.

use std::ops::Range;

use crate::style::CommentStyle;

/// The string-quote character. Comment opening markers must not start with it.
pub(crate) const STRING_QUOTE: char = '"';

/// Result of attempting to match a span at a given position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedSpan {
    /// A complete span. `outer` includes the delimiters, `inner` excludes them.
    Matched {
        outer: Range<usize>,
        inner: Range<usize>,
    },
    /// An opening marker whose required terminator is absent before end of
    /// input (or, for strings, before a raw newline).
    Unterminated {
        prefix: String,
        expected_suffix: String,
        start: usize,
    },
    /// Nothing recognizable at this position.
    NoMatch,
}

/// Width in bytes of the character starting at `at`.
pub(crate) fn char_width(buf: &str, at: usize) -> usize {
    buf[at..].chars().next().map_or(1, char::len_utf8)
}

fn find_from(buf: &str, needle: &str, from: usize) -> Option<usize> {
    buf[from..].find(needle).map(|pos| from + pos)
}

// ── String literals ─────────────────────────────────────────────────────

/// Match a double-quoted string literal whose opening quote sits at `at`.
///
/// A quote is escaped when preceded by an odd number of consecutive
/// backslashes, so `"a\\"` closes after the escaped backslash while `"a\""`
/// does not. The literal must close on the same line; a raw newline or end
/// of input first makes it unterminated.
///
/// Scanning is byte-wise: every character that matters (`"`, `\`, `\n`) is
/// ASCII, and UTF-8 continuation bytes are all >= 0x80, so they can never
/// collide with these tests.
pub(crate) fn match_string(buf: &str, at: usize) -> ParsedSpan {
    let bytes = buf.as_bytes();
    if bytes.get(at) != Some(&b'"') {
        return ParsedSpan::NoMatch;
    }

    let mut i = at + 1;
    let mut escaped = false;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\n' {
            break;
        }
        if escaped {
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == b'"' {
            return ParsedSpan::Matched {
                outer: at..i + 1,
                inner: at + 1..i,
            };
        }
        i += 1;
    }

    ParsedSpan::Unterminated {
        prefix: STRING_QUOTE.to_string(),
        expected_suffix: STRING_QUOTE.to_string(),
        start: at,
    }
}

// ── Comment blocks ──────────────────────────────────────────────────────

/// Match one occurrence of `style` whose opening marker begins at `at`.
///
/// Returns [`ParsedSpan::NoMatch`] when the opening marker is not present at
/// `at`. Line comments (no closing marker) always match: end of input
/// terminates them just like a newline does.
pub(crate) fn match_block(buf: &str, style: &CommentStyle, at: usize) -> ParsedSpan {
    if !buf.as_bytes()[at..].starts_with(style.opening().as_bytes()) {
        return ParsedSpan::NoMatch;
    }
    let after = at + style.opening().len();
    match style.closing() {
        None => match_to_end_of_line(buf, style, at, after),
        Some(closing) => match_delimited(buf, style, closing, at, after),
    }
}

/// Terminate a line comment at the next raw newline or end of input.
fn match_to_end_of_line(buf: &str, style: &CommentStyle, at: usize, after: usize) -> ParsedSpan {
    let bytes = buf.as_bytes();
    match bytes[after..].iter().position(|&b| b == b'\n') {
        Some(off) => {
            let nl = after + off;
            if style.keeps_trailing_newline() {
                // Leave the line break in the buffer. On CRLF input the
                // carriage return stays with its newline.
                let end = if nl > after && bytes[nl - 1] == b'\r' {
                    nl - 1
                } else {
                    nl
                };
                ParsedSpan::Matched {
                    outer: at..end,
                    inner: after..end,
                }
            } else {
                ParsedSpan::Matched {
                    outer: at..nl + 1,
                    inner: after..nl,
                }
            }
        }
        None => ParsedSpan::Matched {
            outer: at..bytes.len(),
            inner: after..bytes.len(),
        },
    }
}

/// Locate the closing delimiter of a block comment, recursing into nested
/// openings of the same style when nesting is enabled.
///
/// Nesting uses a moving search boundary: the boundary starts at the first
/// candidate close, and each inner block that swallows the boundary pushes it
/// to the next close after the inner block ends. The close at the final
/// boundary terminates the outer block. A nested block that cannot be
/// resolved makes the whole span unterminated, reported against the outer
/// opening position.
fn match_delimited(
    buf: &str,
    style: &CommentStyle,
    closing: &str,
    at: usize,
    after: usize,
) -> ParsedSpan {
    let unterminated = || ParsedSpan::Unterminated {
        prefix: style.opening().to_string(),
        expected_suffix: closing.to_string(),
        start: at,
    };

    let Some(first_close) = find_from(buf, closing, after) else {
        return unterminated();
    };

    let mut end_inner = first_close;
    let mut end_outer = first_close + closing.len();

    if style.is_nested() {
        let mut cursor = after;
        let mut boundary = first_close;
        while cursor < boundary {
            match match_block(buf, style, cursor) {
                ParsedSpan::Matched { outer, .. } => {
                    if outer.end >= boundary {
                        let Some(next) = find_from(buf, closing, outer.end) else {
                            return unterminated();
                        };
                        boundary = next;
                    }
                    cursor = outer.end;
                }
                ParsedSpan::Unterminated { .. } => return unterminated(),
                ParsedSpan::NoMatch => cursor += char_width(buf, cursor),
            }
        }
        let Some(close) = find_from(buf, closing, cursor) else {
            return unterminated();
        };
        end_inner = close;
        end_outer = close + closing.len();
    }

    // A closing delimiter that ends with a newline can be asked to leave the
    // line break in the buffer, same as a line comment.
    if style.keeps_trailing_newline()
        && closing.ends_with('\n')
        && end_outer > at
        && buf.as_bytes()[end_outer - 1] == b'\n'
    {
        let mut end = end_outer - 1;
        if end > at && buf.as_bytes()[end - 1] == b'\r' {
            end -= 1;
        }
        end_outer = end;
        end_inner = end;
    }

    ParsedSpan::Matched {
        outer: at..end_outer,
        inner: after..end_inner,
    }
}
