//! `jsonc` — strip comments from annotated JSON (JSONC), producing strict JSON.

mod render;

use std::fs;
use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonc_cleaner_core::{CleanOptions, CommentCleaner, CommentStyle};

use crate::render::{Format, report_parse_error};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "jsonc",
    version,
    about = "Strip comments from annotated JSON (JSONC), producing strict JSON"
)]
struct Cli {
    /// Output mode for diagnostics: "pretty" for coloured terminal output,
    /// "json" for machine-readable envelopes. Defaults to "pretty" when
    /// stdout is a TTY, "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Strip comments from a file (or stdin) and print strict JSON.
    Strip {
        /// Input path; `-` or omitted reads stdin.
        file: Option<String>,

        /// Write the result back to the input file instead of stdout.
        #[arg(long, short)]
        write: bool,

        /// Drop lines left whitespace-only by comment removal.
        #[arg(long)]
        remove_empty_lines: bool,

        /// Disable `#` line comments (for strict-JSONC inputs where `#` has
        /// no meaning).
        #[arg(long)]
        no_hash: bool,
    },

    /// Check that a file's comments and strings are well formed
    /// (exit 1 otherwise).
    Check {
        /// Input path; `-` or omitted reads stdin.
        file: Option<String>,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Strip {
            file,
            write,
            remove_empty_lines,
            no_hash,
        } => {
            let (source, name) = read_input(file.as_deref())?;
            let cleaner = build_cleaner(remove_empty_lines, no_hash)?;
            match cleaner.parse(source.as_str()) {
                Ok(clean) => {
                    if write {
                        let path = file
                            .as_deref()
                            .filter(|f| *f != "-")
                            .context("--write requires a file path, not stdin")?;
                        fs::write(path, &clean)
                            .with_context(|| format!("failed to write {path}"))?;
                    } else {
                        print!("{clean}");
                    }
                }
                Err(err) => {
                    report_parse_error(&name, &source, &err, format);
                    process::exit(1);
                }
            }
        }

        Cmd::Check { file } => {
            let (source, name) = read_input(file.as_deref())?;
            if let Err(err) = CommentCleaner::default().parse(source.as_str()) {
                report_parse_error(&name, &source, &err, format);
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Read the input text and a display name for diagnostics.
fn read_input(file: Option<&str>) -> Result<(String, String)> {
    match file {
        Some(path) if path != "-" => {
            let text =
                fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            Ok((text, path.to_string()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok((text, "<stdin>".to_string()))
        }
    }
}

fn build_cleaner(remove_empty_lines: bool, no_hash: bool) -> Result<CommentCleaner> {
    let mut styles = CommentStyle::defaults();
    if no_hash {
        styles.retain(|style| style.opening() != "#");
    }
    CommentCleaner::new(styles, CleanOptions { remove_empty_lines })
        .context("invalid comment configuration")
}
