use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write `value` as pretty JSON, or run `text` for the plain format.
pub fn emit<T, W, F>(out: &mut W, format: OutputFormat, value: &T, text: F) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    W: Write,
    F: FnOnce(&mut W) -> std::io::Result<()>,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Text => text(out)?,
    }
    Ok(())
}

/// Space-separated values on one line.
pub fn write_line<W: Write, T: Display>(out: &mut W, items: &[T]) -> std::io::Result<()> {
    let line = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{line}")
}

/// One `from to` pair per line.
pub fn write_edges<W: Write, T: Display>(out: &mut W, edges: &[(T, T)]) -> std::io::Result<()> {
    for (from, to) in edges {
        writeln!(out, "{from} {to}")?;
    }
    Ok(())
}
