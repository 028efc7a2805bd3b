//! Error rendering for the `jsonc` binary.
//!
//! Parse failures are rendered either as coloured, source-annotated reports
//! (ariadne) or as single-line JSON envelopes when the output is piped or the
//! user explicitly requests it.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use jsonc_cleaner_core::ParseError;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for diagnostic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, source-annotated output (ariadne).
    Pretty,
    /// Machine-readable JSON envelope.
    Json,
}

impl Format {
    /// Resolve an explicit request, or detect from whether stdout is a TTY.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────────────

/// Render a parse failure to stderr in the selected format.
pub(crate) fn report_parse_error(name: &str, source: &str, err: &ParseError, format: Format) {
    match format {
        Format::Pretty => render_pretty(name, source, err),
        Format::Json => eprintln!("{}", json_envelope(err)),
    }
}

fn render_pretty(name: &str, source: &str, err: &ParseError) {
    let span = error_span(source, err);
    let report = Report::build(ReportKind::Error, (name, span.clone()))
        .with_config(Config::default().with_compact(false))
        .with_message(err.to_string())
        .with_label(
            Label::new((name, span))
                .with_message(label_message(err))
                .with_color(Color::Red),
        )
        .finish();
    report.eprint((name, Source::from(source))).ok();
}

/// Byte span of the failure in the original source, derived from the error's
/// line/column rather than its raw position.
///
/// Positions in a [`ParseError`] index the working buffer, which has already
/// had earlier comments excised; re-deriving from line/column keeps the label
/// anchored to the right line of the file on disk. Clamped so truncated input
/// cannot produce an out-of-range span.
fn error_span(source: &str, err: &ParseError) -> std::ops::Range<usize> {
    let (line, column) = match err {
        ParseError::UnterminatedString { line, column, .. }
        | ParseError::UnterminatedComment { line, column, .. } => (*line, *column),
        _ => (1, 1),
    };
    let line_start = source
        .split_inclusive('\n')
        .scan(0usize, |offset, l| {
            let start = *offset;
            *offset += l.len();
            Some(start)
        })
        .nth(line.saturating_sub(1))
        .unwrap_or(0);
    let start = source[line_start..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(source.len(), |(off, _)| line_start + off)
        .min(source.len());
    let end = (start + 1).min(source.len()).max(start);
    start..end
}

fn label_message(err: &ParseError) -> String {
    match err {
        ParseError::UnterminatedString { .. } => "string opened here is never closed".to_string(),
        ParseError::UnterminatedComment {
            expected_closing, ..
        } => {
            if expected_closing == "\n" || expected_closing == "\r\n" {
                "comment opened here is never closed before end of input".to_string()
            } else {
                format!("comment opened here is missing '{expected_closing}'")
            }
        }
        _ => err.to_string(),
    }
}

fn json_envelope(err: &ParseError) -> serde_json::Value {
    match err {
        ParseError::UnterminatedString {
            position,
            line,
            column,
        } => serde_json::json!({
            "error": {
                "kind": "unterminated_string",
                "message": err.to_string(),
                "line": line,
                "column": column,
                "position": position,
            }
        }),
        ParseError::UnterminatedComment {
            opening,
            expected_closing,
            position,
            line,
            column,
        } => serde_json::json!({
            "error": {
                "kind": "unterminated_comment",
                "message": err.to_string(),
                "opening": opening,
                "expected_closing": expected_closing,
                "line": line,
                "column": column,
                "position": position,
            }
        }),
        _ => serde_json::json!({
            "error": { "kind": "parse_error", "message": err.to_string() }
        }),
    }
}
