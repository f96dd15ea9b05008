//! Plain-text output helpers for CLI commands.

use std::io::{self, Write};

/// Writes each line followed by a newline, then flushes.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
