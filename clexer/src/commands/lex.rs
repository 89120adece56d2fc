//! Lex command implementation.
//!
//! Tokenizes one expression, prints the listing and, unless disabled,
//! writes the paginated report document.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clexer_lex::{tokenize, Token};
use tracing::{debug, info};

use crate::commands::common::{
    error_messages, output_messages, read_expression, OutputFormat,
};
use crate::config::Config;
use crate::error::{ClexerError, Result};
use crate::report::{render_report, write_json, write_listing, LexOutput};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Expression to tokenize; read from stdin when absent.
    pub expression: Option<String>,
    /// Listing format override.
    pub format: Option<String>,
    /// Report path override.
    pub report: Option<PathBuf>,
    /// Skip writing the report.
    pub no_report: bool,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, writing the listing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(&mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
    }

    /// Execute the command against explicit streams.
    ///
    /// The prompt and the report notice go to `out` alongside a text
    /// listing. With JSON output they go to `status`, so `out` carries the
    /// JSON document only.
    pub fn run_with<R: io::BufRead, W: Write, E: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        status: &mut E,
    ) -> Result<()> {
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config.output.format)?;

        let expression = match (&self.args.expression, format) {
            (Some(expression), _) => expression.clone(),
            (None, OutputFormat::Text) => read_expression(input, out)?,
            (None, OutputFormat::Json) => read_expression(input, status)?,
        };

        let start_time = Instant::now();
        let tokens = tokenize(&expression);
        debug!(
            tokens = tokens.len(),
            bytes = expression.len(),
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "tokenized expression"
        );

        match format {
            OutputFormat::Text => write_listing(out, &tokens)?,
            OutputFormat::Json => write_json(out, &LexOutput::new(&expression, &tokens))?,
        }

        if let Some(path) = self.report_path() {
            self.write_report(&path, &expression, &tokens)?;
            let notice = format!("{} {}", output_messages::REPORT_GENERATED, path.display());
            match format {
                OutputFormat::Text => writeln!(out, "{}", notice)?,
                OutputFormat::Json => writeln!(status, "{}", notice)?,
            }
        }

        Ok(())
    }

    /// Where the report goes, or `None` when it is disabled.
    ///
    /// An explicit `--report` path wins over a disabled report in the
    /// configuration; `--no-report` wins over both.
    fn report_path(&self) -> Option<PathBuf> {
        if self.args.no_report {
            return None;
        }
        match &self.args.report {
            Some(path) => Some(path.clone()),
            None if self.config.report.enabled => Some(PathBuf::from(&self.config.report.path)),
            None => None,
        }
    }

    fn write_report(&self, path: &Path, expression: &str, tokens: &[Token]) -> Result<()> {
        let document = render_report(expression, tokens, self.config.report.layout());

        std::fs::write(path, document).map_err(|e| {
            ClexerError::FileOperation(format!(
                "{} {}: {}",
                error_messages::REPORT_WRITE_FAILED,
                path.display(),
                e
            ))
        })?;

        if self.args.verbose {
            info!(path = %path.display(), rows = tokens.len(), "wrote report");
        }
        Ok(())
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    LexCommand::new(args, config).run()
}
