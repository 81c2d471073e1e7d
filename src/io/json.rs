use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use crate::dataset::{CellValue, Dataset, Row};
use crate::error::{Error, Result};

/// Read a JSON file into a [`Dataset`]
///
/// Two layouts are accepted:
/// - records: `[{"col": value, ...}, ...]`
/// - columns: `{"col": [value, ...], ...}`
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref())?;
    read_json_from_reader(BufReader::new(file))
}

/// Parse JSON text
pub fn read_json_str(data: &str) -> Result<Dataset> {
    read_json_from_reader(data.as_bytes())
}

/// Parse JSON from any reader
pub fn read_json_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let json_value: Value = serde_json::from_reader(reader)?;

    let dataset = match json_value {
        Value::Array(array) => read_records_array(array)?,
        Value::Object(map) => read_column_oriented(map)?,
        _ => {
            return Err(Error::Format(
                "JSON must be an array of records or an object of columns".to_string(),
            ))
        }
    };

    log::debug!(
        "read {} rows x {} columns from JSON",
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

fn to_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
        Value::String(s) => CellValue::Text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}

// Record-oriented: column order is first-seen across records
fn read_records_array(array: Vec<Value>) -> Result<Dataset> {
    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(array.len());

    for (idx, item) in array.into_iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(Error::Format(format!("record {} is not an object", idx)));
        };

        let mut row = Row::with_capacity(map.len());
        for (key, value) in map {
            if !columns.contains(&key) {
                columns.push(key.clone());
            }
            row.insert(key, to_cell(value));
        }
        rows.push(row);
    }

    Ok(Dataset::with_rows(columns, rows))
}

// Column-oriented: shorter columns leave trailing cells missing
fn read_column_oriented(map: Map<String, Value>) -> Result<Dataset> {
    let mut columns = Vec::with_capacity(map.len());
    let mut values = Vec::with_capacity(map.len());

    for (key, value) in map {
        let Value::Array(array) = value else {
            return Err(Error::Format(format!("column '{}' must be an array", key)));
        };
        columns.push(key);
        values.push(array);
    }

    let row_count = values.iter().map(Vec::len).max().unwrap_or(0);
    let mut rows: Vec<Row> = (0..row_count).map(|_| Row::new()).collect();
    for (name, column) in columns.iter().zip(values) {
        for (row, value) in rows.iter_mut().zip(column) {
            row.insert(name.clone(), to_cell(value));
        }
    }

    Ok(Dataset::with_rows(columns, rows))
}
