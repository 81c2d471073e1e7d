//! Common test utilities module
//!
//! Provides shared helpers for integration tests:
//! - Row construction from numeric columns
//! - Temporary data files with automatic cleanup

#![allow(dead_code)]

use std::io::Write;

use colstats::dataset::{CellValue, Row};
use tempfile::NamedTempFile;

/// Build rows from parallel columns; `None` becomes a `Null` cell
pub fn rows_from_columns(columns: &[(&str, &[Option<f64>])]) -> Vec<Row> {
    let n_rows = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    (0..n_rows)
        .map(|i| {
            columns
                .iter()
                .map(|(name, values)| {
                    let cell = values.get(i).copied().flatten().map_or(CellValue::Null, CellValue::Number);
                    (name.to_string(), cell)
                })
                .collect()
        })
        .collect()
}

/// Single-column rows from plain values
pub fn numeric_rows(column: &str, values: &[f64]) -> Vec<Row> {
    values
        .iter()
        .map(|&v| std::iter::once((column.to_string(), CellValue::Number(v))).collect())
        .collect()
}

/// Write `contents` to a temporary file with the given suffix
///
/// The file is deleted when the returned handle is dropped
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("colstats_test_")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
