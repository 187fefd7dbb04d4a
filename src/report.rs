// src/report.rs
// =============================================================================
// Turns a Report into the JSON the user sees.
//
// Output looks like this (4-space indentation, keys in sorted order):
//
//   {
//       "a": false,
//       "h1": true
//   }
//
// The whole string is built in memory first and written in one go, so a
// failure halfway through never leaves half a report on stdout.
// =============================================================================

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::checker::Report;

const INDENT: &[u8] = b"    ";

/// Renders the report as pretty JSON with 4-space indentation
pub fn render(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    report
        .serialize(&mut serializer)
        .context("Failed to serialize report")?;

    // serde_json only ever writes UTF-8
    String::from_utf8(buf).context("Report was not valid UTF-8")
}

/// Writes the rendered report to any writer, followed by a newline
pub fn write_to<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let json = render(report)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

/// Prints the report on stdout
pub fn print(report: &Report) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(report, &mut handle).context("Failed to write report to stdout")
}
