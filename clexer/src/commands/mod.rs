//! Command modules for the clexer CLI.
//!
//! Each subcommand lives in its own file and exposes an args struct plus a
//! `run_*` entry point.

pub mod common;

pub mod batch;
pub mod config;
pub mod kinds;
pub mod lex;

pub use batch::{run_batch, BatchArgs};
pub use config::{run_config, ConfigArgs};
pub use kinds::run_kinds;
pub use lex::{run_lex, LexArgs};
