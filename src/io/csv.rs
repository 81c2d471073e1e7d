use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::dataset::{CellValue, Dataset, Row};
use crate::error::{Error, Result};

/// Read a CSV file with a header row into a [`Dataset`]
///
/// Every field is kept as text; numeric interpretation happens in the
/// statistics layer. Fields are trimmed and rows shorter than the header
/// leave their trailing cells missing.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref())?;
    read_csv_from_reader(file)
}

/// Parse CSV text with a header row
pub fn read_csv_str(data: &str) -> Result<Dataset> {
    read_csv_from_reader(data.as_bytes())
}

/// Parse CSV from any reader
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Ok(Dataset::new(Vec::new()));
    }

    let mut seen = std::collections::HashSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(Error::Format(format!("duplicate column name: {}", header)));
        }
    }

    let mut rows = Vec::new();
    let mut ragged = 0usize;
    for result in rdr.records() {
        let record = result?;
        if record.len() != headers.len() {
            ragged += 1;
        }

        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let cell = record
                    .get(i)
                    .map_or(CellValue::Null, |field| CellValue::Text(field.to_string()));
                (header.clone(), cell)
            })
            .collect();
        rows.push(row);
    }

    if ragged > 0 {
        log::warn!(
            "{} of {} CSV records did not match the header width of {}",
            ragged,
            rows.len(),
            headers.len()
        );
    }
    log::debug!("read {} rows x {} columns from CSV", rows.len(), headers.len());

    Ok(Dataset::with_rows(headers, rows))
}
