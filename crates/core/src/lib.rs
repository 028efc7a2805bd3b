//! jsonc-cleaner core library.
//!
//! Strips comment syntax out of an annotated JSON document (JSONC), producing
//! strict JSON. This is a single-pass lexical scanner, not a JSON parser: it
//! recognizes string literals (so comment markers inside them are left alone)
//! and a configurable set of comment forms (line-terminated, delimited, and
//! recursively nested delimited blocks), then excises the matched spans while
//! tracking line/column positions for error reporting.
//!
//! The main entry point is [`CommentCleaner::parse`]:
//!
//! ```
//! use jsonc_cleaner_core::CommentCleaner;
//!
//! let cleaner = CommentCleaner::default();
//! let clean = cleaner.parse("{ \"a\": 1 /* note */ }")?;
//! assert_eq!(clean, "{ \"a\": 1  }");
//! # Ok::<(), jsonc_cleaner_core::ParseError>(())
//! ```
//!
//! The default comment set is `//` and `#` line comments plus nestable
//! `/* ... */` block comments; callers can supply their own set via
//! [`CommentCleaner::new`].

#![warn(missing_docs)]

/// The scan-and-excise engine and its options.
pub mod cleaner;
/// Typed error types for construction, scanning, and the byte/file adapters.
pub mod error;
/// Comment style descriptors and the default registry.
pub mod style;

mod adapters;
mod scan;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use cleaner::{CleanOptions, CommentCleaner};
pub use error::{CleanError, ConfigError, ParseError};
pub use style::CommentStyle;
