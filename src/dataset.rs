//! In-memory tabular data model
//!
//! A [`Dataset`] is an ordered sequence of [`Row`]s, each mapping a column
//! name to a scalar [`CellValue`]. Rows are not required to share the same
//! key set; a key absent from a row is treated exactly like a `Null` cell.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Explicit missing marker
    Null,
    /// Boolean cell (JSON input only)
    Bool(bool),
    /// Numeric cell
    Number(f64),
    /// Text cell; an empty string is a missing value
    Text(String),
}

impl CellValue {
    /// Parse the cell as a finite number.
    ///
    /// Text is trimmed and must parse as a whole; `NaN` and infinities are
    /// rejected whatever their source.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Null | CellValue::Bool(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// True for `Null` and for blank text.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "null"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// Renders integral floats without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One record of the dataset.
pub type Row = HashMap<String, CellValue>;

/// Build a row from `(column, value)` pairs.
pub fn row<K, V, I>(cells: I) -> Row
where
    K: Into<String>,
    V: Into<CellValue>,
    I: IntoIterator<Item = (K, V)>,
{
    cells
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Ordered rows plus the column names in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Create an empty dataset with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a dataset with explicit column order.
    pub fn with_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Create a dataset from rows alone.
    ///
    /// Rows are maps and carry no column order, so the discovered column
    /// names are sorted lexicographically.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns: BTreeSet<&String> = rows.iter().flat_map(|r| r.keys()).collect();
        let columns = columns.into_iter().cloned().collect();
        Self { columns, rows }
    }

    /// Create a dataset from positional records.
    ///
    /// Records shorter than the header leave the trailing cells missing;
    /// extra cells are dropped.
    pub fn from_records<R>(columns: Vec<String>, records: R) -> Self
    where
        R: IntoIterator<Item = Vec<CellValue>>,
    {
        let rows = records
            .into_iter()
            .map(|record| columns.iter().cloned().zip(record).collect())
            .collect();
        Self { columns, rows }
    }

    /// Append a row. Unknown keys are registered as new trailing columns.
    pub fn push_row(&mut self, row: Row) {
        let mut extra: Vec<&String> = row
            .keys()
            .filter(|k| !self.columns.contains(k))
            .collect();
        extra.sort();
        let extra: Vec<String> = extra.into_iter().cloned().collect();
        self.columns.extend(extra);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one column in row order; absent keys yield `Null`.
    pub fn column_cells<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
        column_cells(&self.rows, name)
    }
}

static NULL_CELL: CellValue = CellValue::Null;

/// Cells of `column` for every row, `Null` where the key is absent.
pub fn column_cells<'a>(rows: &'a [Row], column: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
    rows.iter().map(move |r| r.get(column).unwrap_or(&NULL_CELL))
}

/// Per-row numeric view of a column: `Some(x)` for valid values.
pub fn numeric_cells(rows: &[Row], column: &str) -> Vec<Option<f64>> {
    column_cells(rows, column).map(CellValue::as_number).collect()
}

/// Valid numeric values of a column, in row order.
pub fn numeric_values(rows: &[Row], column: &str) -> Vec<f64> {
    column_cells(rows, column)
        .filter_map(CellValue::as_number)
        .collect()
}
