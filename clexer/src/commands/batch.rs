//! Batch command implementation.
//!
//! Tokenizes every line of every input file. Lines are independent, so
//! they are lexed on a rayon pool; results are printed in file and line
//! order regardless of which worker finished first.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clexer_lex::{tokenize, Token};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::commands::common::{error_messages, OutputFormat};
use crate::config::Config;
use crate::error::{ClexerError, Result};
use crate::report::{write_json, write_listing, LexOutput};

/// Arguments for the batch command.
#[derive(Debug, Clone, Default)]
pub struct BatchArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files whose lines are tokenized.
    pub files: Vec<PathBuf>,
    /// Worker count override.
    pub jobs: Option<u32>,
    /// Listing format override.
    pub format: Option<String>,
}

/// One input line and its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// File the line came from.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// Line text without its terminator.
    pub text: String,
}

/// Batch command handler.
pub struct BatchCommand {
    args: BatchArgs,
    config: Config,
}

impl BatchCommand {
    /// Create a new BatchCommand.
    pub fn new(args: BatchArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, writing results to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    /// Execute the command against an explicit output stream.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(ClexerError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config.output.format)?;
        let jobs = self.jobs()?;

        let mut lines = Vec::new();
        for file in &self.args.files {
            lines.extend(read_lines(file)?);
        }

        let start_time = Instant::now();
        let results = tokenize_all(&lines, jobs)?;
        debug!(
            lines = lines.len(),
            jobs,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "tokenized batch"
        );

        match format {
            OutputFormat::Text => {
                for (source, tokens) in lines.iter().zip(&results) {
                    writeln!(out, "{}:{}: {}", source.file.display(), source.line, source.text)?;
                    write_listing(out, tokens)?;
                }
            }
            OutputFormat::Json => {
                let outputs: Vec<LexOutput<'_>> = lines
                    .iter()
                    .zip(&results)
                    .map(|(source, tokens)| LexOutput {
                        file: Some(source.file.display().to_string()),
                        line: Some(source.line),
                        input: &source.text,
                        tokens,
                    })
                    .collect();
                write_json(out, &outputs)?;
            }
        }

        if self.args.verbose {
            let total: usize = results.iter().map(Vec::len).sum();
            info!(
                files = self.args.files.len(),
                lines = lines.len(),
                tokens = total,
                "batch complete"
            );
        }

        Ok(())
    }

    fn jobs(&self) -> Result<usize> {
        let jobs = self.args.jobs.unwrap_or(self.config.batch.jobs);
        if jobs == 0 {
            return Err(ClexerError::Validation(
                error_messages::INVALID_JOBS.to_string(),
            ));
        }
        Ok(jobs as usize)
    }
}

/// Reads a file into numbered lines.
pub fn read_lines(path: &Path) -> Result<Vec<SourceLine>> {
    if !path.exists() {
        return Err(ClexerError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ClexerError::FileOperation(format!(
            "{} {}: {}",
            error_messages::INPUT_READ_FAILED,
            path.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(index, text)| SourceLine {
            file: path.to_path_buf(),
            line: index + 1,
            text: text.to_string(),
        })
        .collect())
}

/// Tokenizes every line on a pool of `jobs` threads, keeping input order.
pub fn tokenize_all(lines: &[SourceLine], jobs: usize) -> Result<Vec<Vec<Token>>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| ClexerError::Config(format!("Failed to start worker pool: {}", e)))?;

    Ok(pool.install(|| lines.par_iter().map(|line| tokenize(&line.text)).collect()))
}

/// Run the batch command.
pub fn run_batch(args: BatchArgs, config: Config) -> Result<()> {
    BatchCommand::new(args, config).run()
}
