//! Kinds command implementation.
//!
//! Prints the stable token kind names consumed by report tooling.

use std::io::{self, Write};

use clexer_lex::TokenKind;

use crate::error::Result;

/// Writes every token kind name, one per line.
pub fn write_kinds<W: Write>(out: &mut W) -> Result<()> {
    for kind in TokenKind::ALL {
        writeln!(out, "{}", kind)?;
    }
    Ok(())
}

/// Run the kinds command.
pub fn run_kinds() -> Result<()> {
    let stdout = io::stdout();
    write_kinds(&mut stdout.lock())
}
