//! Source data loading
//!
//! Reads the commitment table from delimited text with a header row. Header
//! names select record fields; unknown columns are ignored and missing
//! columns become empty fields. Loading is the only fallible step: once the
//! rows are read, normalization cannot fail.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pledge_common::{Dataset, Error, RawRecord, Result};
use tracing::info;

/// Read raw rows from CSV text
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: RawRecord = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load and normalize a CSV data file
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "Data file {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let rows = read_rows(file)?;
    info!("Read {} rows from {}", rows.len(), path.display());

    Ok(Dataset::from_raw(rows))
}
