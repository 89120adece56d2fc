//! Config command implementation.
//!
//! Shows the effective configuration, or writes it out as a starting
//! `clexer.toml`.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::{ClexerError, Result};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
}

/// Prints or saves `config`.
pub fn write_config<W: Write>(args: &ConfigArgs, config: &Config, out: &mut W) -> Result<()> {
    match &args.write {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(ClexerError::FileOperation(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            config.save_to_path(path)?;
            info!(path = %path.display(), "wrote configuration");
        }
        None => write!(out, "{}", config.to_toml()?)?,
    }
    Ok(())
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, config: Config) -> Result<()> {
    let stdout = io::stdout();
    write_config(&args, &config, &mut stdout.lock())
}
