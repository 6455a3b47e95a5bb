// src/table/mod.rs
pub mod pin_row;

pub use pin_row::{PinRow, PIN_ROW_MIN_FIELDS};

use anyhow::{bail, Context, Result};
use csv::{Position, ReaderBuilder, StringRecord};
use std::{fs, ops::Range, path::Path};
use tracing::{debug, info};

/// One CSV record, positional only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line in the source file where this record starts.
    pub line: u64,
    pub fields: Vec<String>,
}

impl Row {
    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }
}

#[derive(Debug)]
pub struct Table {
    /// First record of the file. Kept for logging, never emitted.
    pub header: Row,
    /// Every record after the header, in file order.
    pub rows: Vec<Row>,
}

/// Read `path` fully into memory and split off the header record.
///
/// Records may have differing field counts; nothing is checked against the
/// header here. Each empty line becomes a row with no fields. A file with no
/// lines at all is an error.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("Failed to read CSV file: {:?}", path))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    let mut cursor = Position::new();
    let mut idx = 0usize;
    loop {
        let more = rdr
            .read_record(&mut record)
            .with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        let skipped = skipped_lines(&data, &cursor);
        let line = skipped.end;
        rows.extend(skipped.map(|blank| Row {
            line: blank,
            fields: Vec::new(),
        }));
        if !more {
            break;
        }
        rows.push(Row {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
        cursor = rdr.position().clone();
        idx += 1;
    }
    drop(rdr);

    let mut iter = rows.into_iter();
    let Some(header) = iter.next() else {
        bail!("empty input: {:?} contains no rows", path);
    };
    let rows: Vec<Row> = iter.collect();

    debug!(header = ?header.fields, "header row");
    info!(rows = rows.len(), "loaded pin table");

    Ok(Table { header, rows })
}

/// Line numbers of the empty lines the reader skips after `at`.
///
/// `at` is where the reader stopped after the previous record. An LF
/// terminator is consumed with its record, but the `\n` of a CRLF is left
/// behind and must not count as an empty line.
fn skipped_lines(data: &[u8], at: &Position) -> Range<u64> {
    let start = (at.byte() as usize).min(data.len());
    let run = data[start..]
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .count();
    let gap = &data[start..start + run];

    let mut first = at.line();
    let mut empty = gap.iter().filter(|&&b| b == b'\n').count() as u64;
    if gap.first() == Some(&b'\n') && start > 0 && data[start - 1] == b'\r' {
        first += 1;
        empty -= 1;
    }
    first..first + empty
}
