//! Comment style descriptors.
//!
//! A [`CommentStyle`] is a plain data description of one comment form: its
//! opening marker, an optional closing marker, and how matching behaves. All
//! comment forms share one matching algorithm parameterized by these fields,
//! so there is no per-style dispatch.

/// Describes one recognizable comment form.
///
/// A style with no closing marker is a *line comment*: it runs to the next
/// raw newline (or end of input). A style with a closing marker is a *block
/// comment*; when [`nested`](Self::nested) is enabled, every inner occurrence
/// of the opening marker must be closed before the outer block's closing
/// marker counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    opening: String,
    closing: Option<String>,
    nested: bool,
    keep_trailing_newline: bool,
}

impl CommentStyle {
    /// A line comment introduced by `opening` and terminated by end of line.
    ///
    /// The terminating line break (including a preceding carriage return)
    /// stays in the output by default, so removing the comment does not join
    /// the surrounding lines. Use
    /// [`keep_trailing_newline(false)`](Self::keep_trailing_newline) to excise
    /// the line break along with the comment.
    pub fn line(opening: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            closing: None,
            nested: false,
            keep_trailing_newline: true,
        }
    }

    /// A block comment delimited by `opening` and `closing`.
    pub fn block(opening: impl Into<String>, closing: impl Into<String>) -> Self {
        Self {
            opening: opening.into(),
            closing: Some(closing.into()),
            nested: false,
            keep_trailing_newline: false,
        }
    }

    /// Whether inner occurrences of this style's opening marker must be
    /// closed before the outer closing marker terminates the block.
    ///
    /// Meaningless for line comments (there is nothing to recurse into).
    #[must_use]
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    /// Whether a terminating line break is left in the buffer rather than
    /// excised with the comment.
    #[must_use]
    pub fn keep_trailing_newline(mut self, keep: bool) -> Self {
        self.keep_trailing_newline = keep;
        self
    }

    /// The marker that introduces this comment form.
    pub fn opening(&self) -> &str {
        &self.opening
    }

    /// The marker that terminates this comment form, if it has one.
    /// `None` means the comment runs to end of line.
    pub fn closing(&self) -> Option<&str> {
        self.closing.as_deref()
    }

    /// Whether same-type nesting is enabled for this style.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Whether a terminating line break survives excision.
    pub fn keeps_trailing_newline(&self) -> bool {
        self.keep_trailing_newline
    }

    /// The conventional JSONC-with-hash comment set: `//` and `#` line
    /// comments plus nestable `/* ... */` block comments.
    ///
    /// Priority is registration order; the first style whose opening marker
    /// matches at a position wins.
    pub fn defaults() -> Vec<CommentStyle> {
        vec![
            CommentStyle::line("//"),
            CommentStyle::line("#"),
            CommentStyle::block("/*", "*/").nested(true),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_style_keeps_newline_by_default() {
        let style = CommentStyle::line("//");
        assert_eq!(style.opening(), "//");
        assert_eq!(style.closing(), None);
        assert!(style.keeps_trailing_newline());
        assert!(!style.is_nested());
    }

    #[test]
    fn block_style_excises_newlines_by_default() {
        let style = CommentStyle::block("/*", "*/");
        assert_eq!(style.closing(), Some("*/"));
        assert!(!style.keeps_trailing_newline());
    }

    #[test]
    fn defaults_are_slash_hash_and_nested_block() {
        let styles = CommentStyle::defaults();
        let openings: Vec<&str> = styles.iter().map(CommentStyle::opening).collect();
        assert_eq!(openings, ["//", "#", "/*"]);
        assert!(styles[2].is_nested());
    }
}
