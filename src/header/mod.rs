// src/header/mod.rs
use crate::table::{PinRow, Row};
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, info, warn};

/// Written once at the top of every generated header.
pub const BANNER: &str = "/**\n * @author: Quinn Henthorne henth013@d.umn.edu\n*/\n\n";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    pub defines: usize,
    pub blank_lines: usize,
}

/// `#define <NAME> <VALUE> //<COMMENT>` for a complete row, `None` for a
/// placeholder row.
pub fn render_line(pin: &PinRow<'_>) -> Option<String> {
    if pin.is_placeholder() {
        return None;
    }
    Some(format!(
        "#define {} {} //{}\n",
        pin.name(),
        pin.value(),
        pin.comment()
    ))
}

/// Write the banner and one line per row into `out`.
///
/// Stops at the first short row. Whatever was written before it stays in
/// `out` and is counted in `summary`.
pub fn emit<W: Write>(out: &mut W, rows: &[Row], summary: &mut EmitSummary) -> Result<()> {
    out.write_all(BANNER.as_bytes())
        .context("writing header banner")?;

    for row in rows {
        let pin = PinRow::try_from(row)?;
        match render_line(&pin) {
            Some(line) => {
                debug!(line = pin.line, name = pin.name(), value = pin.value(), "define");
                out.write_all(line.as_bytes())
                    .with_context(|| format!("writing define for line {}", pin.line))?;
                summary.defines += 1;
            }
            None => {
                warn!(line = pin.line, "row missing name or value; writing blank line");
                out.write_all(b"\n")
                    .with_context(|| format!("writing blank line for line {}", pin.line))?;
                summary.blank_lines += 1;
            }
        }
    }
    Ok(())
}

/// Flush `out` once `emit` is done. When `emit` failed its error is
/// returned even if the flush fails too.
fn finish<W: Write>(out: &mut W, emitted: Result<()>) -> Result<()> {
    match emitted {
        Ok(()) => out.flush().context("flushing header output"),
        Err(e) => {
            if let Err(flush_err) = out.flush() {
                warn!(error = %flush_err, "could not flush lines written before the failure");
            }
            Err(e)
        }
    }
}

/// Create (or truncate) `path` and write the generated header for `rows`.
///
/// On a malformed row the lines for earlier rows are still flushed to disk
/// before the error is returned.
#[tracing::instrument(level = "info", skip(path, rows), fields(path = %path.as_ref().display(), rows = rows.len()))]
pub fn write_header<P: AsRef<Path>>(path: P, rows: &[Row]) -> Result<EmitSummary> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create header file: {:?}", path))?;
    let mut out = BufWriter::new(file);

    let mut summary = EmitSummary::default();
    let emitted = emit(&mut out, rows, &mut summary);
    finish(&mut out, emitted)
        .with_context(|| format!("Failed to write header file: {:?}", path))?;

    info!(
        defines = summary.defines,
        blank_lines = summary.blank_lines,
        "header written"
    );
    Ok(summary)
}
