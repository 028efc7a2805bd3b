//! Typed error types for the cleaning engine.
//!
//! Scan failures ([`ParseError`]) are terminal for the current `parse` call:
//! no partial output is returned and nothing is retried. All failures are
//! deterministic functions of the input text. The byte- and file-level
//! adapters add their own error kinds on top via [`CleanError`].

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

/// A failure encountered while scanning the input text.
///
/// Line and column are 1-based and computed relative to the most recent raw
/// newline scanned before the failure point. Newlines inside already-excised
/// comments still count toward the line number, so it refers to the original
/// input; the position and column refer to the working buffer at the moment
/// of failure.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A quoted literal has no closing quote before a raw newline or end of
    /// input.
    #[error("unterminated string '\"' on line {line}, column {column}")]
    UnterminatedString {
        /// Byte offset of the opening quote in the working buffer.
        position: usize,
        /// 1-based line of the opening quote.
        line: usize,
        /// 1-based column of the opening quote.
        column: usize,
    },

    /// A comment block has no resolvable terminator before end of input.
    ///
    /// Line comments never produce this (end of input terminates them); only
    /// a delimited block with a missing closing marker does.
    #[error(
        "unterminated comment '{opening}' on line {line}, column {column}: missing closing block {}",
        suffix_label(.expected_closing)
    )]
    UnterminatedComment {
        /// The opening marker that introduced the comment.
        opening: String,
        /// The closing marker that was never found.
        expected_closing: String,
        /// Byte offset of the opening marker in the working buffer.
        position: usize,
        /// 1-based line of the opening marker.
        line: usize,
        /// 1-based column of the opening marker.
        column: usize,
    },
}

/// Render an expected terminator for an error message, distinguishing an
/// end-of-line terminator from an explicit delimiter string.
fn suffix_label(suffix: &str) -> String {
    if suffix == "\n" || suffix == "\r\n" {
        "newline".to_string()
    } else {
        format!("'{suffix}'")
    }
}

/// A rejected [`CommentStyle`](crate::CommentStyle) set, reported at engine
/// construction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A style's opening marker is the empty string.
    #[error("comment opening marker must not be empty")]
    EmptyOpening,

    /// A style's opening marker begins with the string-quote character, which
    /// would make it unreachable behind string matching.
    #[error("comment opening marker {0:?} must not start with '\"'")]
    OpeningStartsWithQuote(String),

    /// Two styles in the set share the same opening marker.
    #[error("duplicate comment opening marker {0:?}")]
    DuplicateOpening(String),
}

/// A failure from the byte- or file-level convenience adapters.
///
/// Core scan errors pass through unchanged as [`CleanError::Parse`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// The scan itself failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Decode {
        /// Length of the longest valid UTF-8 prefix of the input.
        valid_up_to: usize,
        /// The underlying decode error.
        #[source]
        source: Utf8Error,
    },

    /// Reading the input file failed.
    #[error("failed to read '{}'", .path.display())]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}
