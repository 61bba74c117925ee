//! Output formatting for CLI results.
//!
//! Responsibilities:
//! - Define the supported output formats.
//! - Render resolved values as plain text or JSON.
//!
//! Invariants:
//! - Text output is line-oriented so it can be piped into shell tools.
//! - JSON output is a single pretty-printed document followed by a newline.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write `value` as pretty JSON.
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write each line followed by a newline.
pub fn write_lines<I, S>(out: &mut impl Write, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}
