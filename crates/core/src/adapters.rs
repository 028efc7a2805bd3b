//! Byte- and file-level convenience adapters.
//!
//! Thin wrappers around [`CommentCleaner::parse`] for callers holding raw
//! bytes or a file path. Scan errors surface unchanged; only decoding and
//! I/O add error kinds of their own.

use std::fs;
use std::path::Path;

use crate::cleaner::CommentCleaner;
use crate::error::CleanError;

impl CommentCleaner {
    /// Decode `bytes` as UTF-8 and strip comments, returning the cleaned text.
    pub fn parse_bytes_to_string(&self, bytes: &[u8]) -> Result<String, CleanError> {
        let text = std::str::from_utf8(bytes).map_err(|source| CleanError::Decode {
            valid_up_to: source.valid_up_to(),
            source,
        })?;
        Ok(self.parse(text)?)
    }

    /// Decode `bytes` as UTF-8, strip comments, and re-encode the result.
    ///
    /// Re-encoding an owned `String` back to UTF-8 bytes cannot fail.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, CleanError> {
        Ok(self.parse_bytes_to_string(bytes)?.into_bytes())
    }

    /// Read the file at `path` and strip comments from its contents.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> Result<String, CleanError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| CleanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_bytes_to_string(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn bytes_round_trip() {
        let cleaner = CommentCleaner::default();
        let out = cleaner.parse_bytes(b"{ \"a\": 1 /* x */ }").unwrap();
        assert_eq!(out, b"{ \"a\": 1  }");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let cleaner = CommentCleaner::default();
        let err = cleaner.parse_bytes_to_string(b"{ \"a\": \xff }").unwrap_err();
        assert!(matches!(err, CleanError::Decode { valid_up_to: 7, .. }));
    }

    #[test]
    fn scan_errors_pass_through_unchanged() {
        let cleaner = CommentCleaner::default();
        let err = cleaner.parse_bytes_to_string(b"{ /* oops }").unwrap_err();
        let CleanError::Parse(ParseError::UnterminatedComment { opening, .. }) = err else {
            panic!("expected a pass-through parse error");
        };
        assert_eq!(opening, "/*");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let cleaner = CommentCleaner::default();
        let err = cleaner
            .parse_path("definitely/not/a/real/path.jsonc")
            .unwrap_err();
        assert!(matches!(err, CleanError::Read { .. }));
    }
}
