//! Rendering of token sequences.
//!
//! Three renderings share the same `(input, tokens)` pair: the line
//! listing printed after every run, a JSON document for tooling, and the
//! paginated report document written to disk.

use std::io::Write;

use clexer_lex::Token;
use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::Result;

/// Heading printed above the line listing.
pub const LISTING_HEADING: &str = "Lexical Analysis Results:";

/// Title on the first report page.
pub const REPORT_TITLE: &str = "Lexical Analysis Report";

/// Column where the kind column starts in the report table.
const KIND_COLUMN: usize = 24;

/// Line written between report pages.
const PAGE_BREAK: char = '\x0c';

fn separator() -> String {
    "=".repeat(37)
}

/// Writes the heading and one `Lexeme: .., Token: ..` line per token.
pub fn write_listing<W: Write>(out: &mut W, tokens: &[Token]) -> Result<()> {
    writeln!(out, "{}", LISTING_HEADING)?;
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// JSON shape of one tokenized input.
#[derive(Debug, Serialize)]
pub struct LexOutput<'a> {
    /// Source file, present in batch mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line within `file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// The tokenized text.
    pub input: &'a str,
    /// Tokens in input order.
    pub tokens: &'a [Token],
}

impl<'a> LexOutput<'a> {
    /// Output for a single expression.
    pub fn new(input: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            file: None,
            line: None,
            input,
            tokens,
        }
    }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Page capacity of the report document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Table rows on page one, which also carries the header block.
    pub first_page_rows: usize,
    /// Table rows on each later page.
    pub rows_per_page: usize,
}

impl PageLayout {
    /// Returns how the rows of a table with `rows` entries are split.
    ///
    /// A zero capacity is treated as one row per page.
    pub fn page_sizes(&self, rows: usize) -> Vec<usize> {
        let first = self.first_page_rows.max(1);
        let rest = self.rows_per_page.max(1);

        let mut sizes = vec![rows.min(first)];
        let mut remaining = rows.saturating_sub(first);
        while remaining > 0 {
            let size = remaining.min(rest);
            sizes.push(size);
            remaining -= size;
        }
        sizes
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        ReportConfig::default().layout()
    }
}

impl ReportConfig {
    /// Page layout described by this configuration.
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            first_page_rows: self.first_page_rows,
            rows_per_page: self.rows_per_page,
        }
    }
}

fn table_row(lexeme: &str, kind: &str) -> String {
    format!("{:<width$} {}", lexeme, kind, width = KIND_COLUMN - 1)
}

/// Renders the paginated report document.
///
/// Page one holds the title, the verbatim input and the table header,
/// followed by as many rows as the layout allows. Later pages hold rows
/// only and are preceded by a form feed line.
pub fn render_report(input: &str, tokens: &[Token], layout: PageLayout) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        separator(),
        "Input Expression:".to_string(),
        input.to_string(),
        separator(),
        table_row("Lexemes", "Tokens"),
        separator(),
    ];

    if tokens.is_empty() {
        lines.push("No tokens generated.".to_string());
    } else {
        let mut rows = tokens.iter();
        for (page, size) in layout.page_sizes(tokens.len()).into_iter().enumerate() {
            if page > 0 {
                lines.push(PAGE_BREAK.to_string());
            }
            for token in rows.by_ref().take(size) {
                lines.push(table_row(&token.lexeme, token.kind.as_str()));
            }
        }
    }

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use clexer_lex::{tokenize, TokenKind};

    #[test]
    fn test_listing() {
        let mut out = Vec::new();
        write_listing(&mut out, &tokenize("x = 1;")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Lexical Analysis Results:\n\
             Lexeme: x, Token: identifier\n\
             Lexeme: =, Token: equal_sign\n\
             Lexeme: 1, Token: int_literal\n\
             Lexeme: ;, Token: semicolon\n"
        );
    }

    #[test]
    fn test_listing_empty() {
        let mut out = Vec::new();
        write_listing(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Lexical Analysis Results:\n");
    }

    #[test]
    fn test_json_output() {
        let tokens = tokenize("a+b");
        let mut out = Vec::new();
        write_json(&mut out, &LexOutput::new("a+b", &tokens)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["input"], "a+b");
        assert_eq!(value["tokens"][1]["lexeme"], "+");
        assert_eq!(value["tokens"][1]["kind"], "plus_op");
        assert!(value.get("file").is_none());
    }

    #[test]
    fn test_page_sizes() {
        let layout = PageLayout {
            first_page_rows: 3,
            rows_per_page: 4,
        };
        assert_eq!(layout.page_sizes(0), vec![0]);
        assert_eq!(layout.page_sizes(3), vec![3]);
        assert_eq!(layout.page_sizes(4), vec![3, 1]);
        assert_eq!(layout.page_sizes(12), vec![3, 4, 4, 1]);
    }

    #[test]
    fn test_default_layout() {
        let layout = PageLayout::default();
        assert_eq!(layout.page_sizes(29), vec![29]);
        assert_eq!(layout.page_sizes(30), vec![29, 1]);
        assert_eq!(layout.page_sizes(29 + 36 + 1), vec![29, 36, 1]);
    }

    #[test]
    fn test_report_header_and_rows() {
        let tokens = tokenize("int x;");
        let report = render_report("int x;", &tokens, PageLayout::default());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Lexical Analysis Report");
        assert_eq!(lines[1], "=".repeat(37));
        assert_eq!(lines[2], "Input Expression:");
        assert_eq!(lines[3], "int x;");
        assert_eq!(lines[5], format!("{:<23} Tokens", "Lexemes"));
        assert_eq!(lines[7], format!("{:<23} datatype", "int"));
        assert_eq!(lines[8], format!("{:<23} identifier", "x"));
        assert_eq!(lines[9], format!("{:<23} semicolon", ";"));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_report_without_tokens() {
        let report = render_report("   ", &[], PageLayout::default());
        assert!(report.ends_with("No tokens generated.\n"));
        assert!(!report.contains(PAGE_BREAK));
    }

    #[test]
    fn test_report_paginates() {
        let tokens: Vec<Token> = (0..7)
            .map(|i| Token::new(i.to_string(), TokenKind::IntLiteral))
            .collect();
        let layout = PageLayout {
            first_page_rows: 2,
            rows_per_page: 3,
        };
        let report = render_report("0 1 2 3 4 5 6", &tokens, layout);
        let pages: Vec<&str> = report.split(PAGE_BREAK).collect();

        assert_eq!(pages.len(), 3);
        assert!(pages[0].starts_with(REPORT_TITLE));
        assert_eq!(pages[1].matches("int_literal").count(), 3);
        assert_eq!(pages[2].matches("int_literal").count(), 2);
        assert!(!pages[1].contains(REPORT_TITLE));
    }

    #[test]
    fn test_long_lexeme_keeps_column_gap() {
        let lexeme = "a".repeat(40);
        let row = table_row(&lexeme, "identifier");
        assert_eq!(row, format!("{} identifier", lexeme));
    }
}
