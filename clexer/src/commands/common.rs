//! Common types and utilities for clexer commands.

use std::io::{BufRead, Write};

use crate::error::{ClexerError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Lexeme: .., Token: ..` lines
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolves the flag value if given, else the configured value.
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        if let Some(name) = flag {
            return Self::parse(name).ok_or_else(|| {
                ClexerError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
            });
        }

        Self::parse(configured).ok_or_else(|| {
            ClexerError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                configured
            ))
        })
    }
}

// ============================================================================
// Input
// ============================================================================

/// Prompts on `writer` and reads one line from `reader`.
///
/// The trailing line terminator is removed; everything else, including
/// leading and trailing spaces, is kept.
pub fn read_expression<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "{}", output_messages::PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ClexerError::Validation(
            error_messages::NO_INPUT.to_string(),
        ));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

// ============================================================================
// Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when stdin closes before a line is read.
    pub const NO_INPUT: &str = "No input provided";

    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when an input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when an input file cannot be read.
    pub const INPUT_READ_FAILED: &str = "Failed to read input file";

    /// Error when the report cannot be written.
    pub const REPORT_WRITE_FAILED: &str = "Failed to write report";

    /// Error for an unknown `--format` value.
    pub const UNKNOWN_FORMAT: &str = "Unknown output format:";

    /// Error for an unknown format in the configuration file.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid output format in configuration:";

    /// Error for a zero `--jobs` value.
    pub const INVALID_JOBS: &str = "Number of jobs must be at least 1";
}

/// Standard messages written to stdout.
pub mod output_messages {
    /// Interactive prompt.
    pub const PROMPT: &str = "Enter an expression: ";

    /// Printed after the report file is written.
    pub const REPORT_GENERATED: &str = "Report generated:";
}
