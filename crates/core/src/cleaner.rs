//! The scan-and-excise engine.
//!
//! [`CommentCleaner::parse`] walks the text once. At each unconsumed position
//! it first checks for a string literal (skipped verbatim, so comment markers
//! inside strings are never comments), then tries each registered comment
//! style in priority order and excises the first match in place, and
//! otherwise advances one character. The working buffer shrinks monotonically;
//! the cursor is always re-derived from the deletion boundary, never from a
//! stale offset.

use crate::error::{ConfigError, ParseError};
use crate::scan::{self, ParsedSpan};
use crate::style::CommentStyle;

/// Options applied around comment removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// After excision, drop every line whose content is empty once trailing
    /// whitespace is trimmed.
    pub remove_empty_lines: bool,
}

/// Strips registered comment forms out of annotated JSON text.
///
/// Construction validates the style set once; a cleaner is immutable and
/// reusable afterwards. Each [`parse`](Self::parse) call owns its working
/// buffer exclusively, so a cleaner can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct CommentCleaner {
    styles: Vec<CommentStyle>,
    options: CleanOptions,
}

impl Default for CommentCleaner {
    /// A cleaner with [`CommentStyle::defaults`] and default options.
    fn default() -> Self {
        Self {
            styles: CommentStyle::defaults(),
            options: CleanOptions::default(),
        }
    }
}

impl CommentCleaner {
    /// Build a cleaner over the given comment styles.
    ///
    /// Styles are tried in registration order; the first whose opening marker
    /// matches at a position wins. Fails when any opening marker is empty,
    /// starts with the string-quote character, or duplicates another style's
    /// opening marker.
    pub fn new(styles: Vec<CommentStyle>, options: CleanOptions) -> Result<Self, ConfigError> {
        let mut seen: Vec<&str> = Vec::with_capacity(styles.len());
        for style in &styles {
            let opening = style.opening();
            if opening.is_empty() {
                return Err(ConfigError::EmptyOpening);
            }
            if opening.starts_with(scan::STRING_QUOTE) {
                return Err(ConfigError::OpeningStartsWithQuote(opening.to_string()));
            }
            if seen.contains(&opening) {
                return Err(ConfigError::DuplicateOpening(opening.to_string()));
            }
            seen.push(opening);
        }
        Ok(Self { styles, options })
    }

    /// The default style set with the given options.
    pub fn with_options(options: CleanOptions) -> Self {
        Self {
            styles: CommentStyle::defaults(),
            options,
        }
    }

    /// The registered comment styles, in priority order.
    pub fn styles(&self) -> &[CommentStyle] {
        &self.styles
    }

    /// Remove all registered comment forms from `text`.
    ///
    /// Returns the cleaned text, or the first unterminated string or comment
    /// encountered in left-to-right scan order. No partial output is produced
    /// on failure.
    pub fn parse(&self, text: impl Into<String>) -> Result<String, ParseError> {
        let mut buf: String = text.into();
        let mut line = 1usize;
        let mut last_newline: Option<usize> = None;
        let mut i = 0usize;

        while i < buf.len() {
            if buf.as_bytes()[i] == b'\n' {
                line += 1;
                last_newline = Some(i);
                i += 1;
                continue;
            }

            match scan::match_string(&buf, i) {
                ParsedSpan::Matched { outer, .. } => {
                    // Skip the literal verbatim, contents uninspected.
                    i = outer.end;
                    continue;
                }
                ParsedSpan::Unterminated { start, .. } => {
                    return Err(ParseError::UnterminatedString {
                        position: start,
                        line,
                        column: column_at(&buf, last_newline, start),
                    });
                }
                ParsedSpan::NoMatch => {}
            }

            let mut excised = false;
            for style in &self.styles {
                match scan::match_block(&buf, style, i) {
                    ParsedSpan::Matched { outer, .. } => {
                        // Keep the line counter in step with newlines that
                        // disappear along with the comment.
                        line += count_newlines(&buf.as_bytes()[outer.clone()]);
                        buf.replace_range(outer, "");
                        // The cursor stays put: the text after the comment
                        // has shifted into this position.
                        excised = true;
                        break;
                    }
                    ParsedSpan::Unterminated {
                        prefix,
                        expected_suffix,
                        start,
                    } => {
                        return Err(ParseError::UnterminatedComment {
                            opening: prefix,
                            expected_closing: expected_suffix,
                            position: start,
                            line,
                            column: column_at(&buf, last_newline, start),
                        });
                    }
                    ParsedSpan::NoMatch => {}
                }
            }
            if excised {
                continue;
            }

            i += scan::char_width(&buf, i);
        }

        if self.options.remove_empty_lines {
            buf = remove_empty_lines(&buf);
        }
        Ok(buf)
    }
}

/// 1-based column of `at`: characters since the most recent newline (or the
/// start of the buffer), plus one.
fn column_at(buf: &str, last_newline: Option<usize>, at: usize) -> usize {
    let line_start = last_newline.map_or(0, |nl| nl + 1);
    buf[line_start..at].chars().count() + 1
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

/// Drop lines whose trailing-whitespace-trimmed content is empty.
fn remove_empty_lines(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim_end().is_empty())
        .collect();
    lines.join("\n")
}
