//! Configuration module for the clexer CLI.
//!
//! Settings come from a `clexer.toml` file. Every field has a default, so
//! a missing file or a partial table is fine. Command-line flags override
//! whatever is loaded here.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ClexerError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clexer.toml";

/// Fallback worker count when the CPU count does not fit in a `u32`.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Listing output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Report document settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Batch mode settings.
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Listing output options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Listing format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

/// Report document options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Whether `lex` writes a report unless told otherwise.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Where the report is written.
    #[serde(default = "default_report_path")]
    pub path: String,

    /// Table rows on the first page, below the header block.
    #[serde(default = "default_first_page_rows")]
    pub first_page_rows: usize,

    /// Table rows on every following page.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
}

/// Batch mode options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchConfig {
    /// Number of worker threads.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

fn default_report_path() -> String {
    "lexical_analysis.txt".to_string()
}

fn default_first_page_rows() -> usize {
    29
}

fn default_rows_per_page() -> usize {
    36
}

fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            output: OutputConfig::default(),
            report: ReportConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_report_path(),
            first_page_rows: default_first_page_rows(),
            rows_per_page: default_rows_per_page(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches the current directory, then `~/.config/clexer`, then the
    /// platform configuration directory. Returns the defaults if no file
    /// is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClexerError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ClexerError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serializes the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ClexerError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Rejects values no command can work with.
    pub fn validate(&self) -> Result<()> {
        if self.report.first_page_rows == 0 {
            return Err(ClexerError::Config(
                "report.first_page_rows must be at least 1".to_string(),
            ));
        }
        if self.report.rows_per_page == 0 {
            return Err(ClexerError::Config(
                "report.rows_per_page must be at least 1".to_string(),
            ));
        }
        if self.batch.jobs == 0 {
            return Err(ClexerError::Config(
                "batch.jobs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("clexer").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("clexer").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
