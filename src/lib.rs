pub mod header;
pub mod table;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

pub use header::EmitSummary;

/// Input and output locations for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Load the pin table from `config.input` and write the header to
/// `config.output`. The input is fully read and closed before the output is
/// opened.
#[tracing::instrument(level = "info", skip(config), fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &Config) -> Result<EmitSummary> {
    let table::Table { header: header_row, rows } = table::load_table(&config.input)?;
    info!(columns = header_row.len(), "discarding header row");
    header::write_header(&config.output, &rows)
}
