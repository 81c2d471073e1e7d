//! Column type detection and chart suggestions
//!
//! A column's kind decides which previews make sense for it. Detection
//! looks only at *present* cells (not `Null`, not blank text):
//!
//! - **Numerical** when more than 80% of present cells are valid numbers
//! - **Datetime** otherwise, when more than 80% parse as a date or datetime
//! - **Categorical** for everything else, including columns with no present cell

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::dataset::{column_cells, CellValue, Dataset, Row};

const KIND_RATIO: f64 = 0.8;
const SAMPLE_SIZE: usize = 5;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numerical,
    Categorical,
    Datetime,
}

/// Summary of one column used to drive chart selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
    /// Distinct present values, compared by display text
    pub unique_values: usize,
    pub missing_values: usize,
    /// First present values in row order
    pub sample_values: Vec<CellValue>,
}

/// Whether a text cell looks like a date or a datetime.
pub fn is_datetime(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(text).is_ok()
        || DATETIME_FORMATS
            .iter()
            .any(|f| NaiveDateTime::parse_from_str(text, f).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|f| NaiveDate::parse_from_str(text, f).is_ok())
}

/// Profile one column of `rows`.
pub fn profile_column(rows: &[Row], name: &str) -> ColumnInfo {
    let present: Vec<&CellValue> = column_cells(rows, name).filter(|c| !c.is_missing()).collect();
    let missing_values = rows.len() - present.len();

    let unique_values = present
        .iter()
        .map(|c| c.to_string())
        .collect::<HashSet<_>>()
        .len();

    let numeric = present.iter().filter(|c| c.as_number().is_some()).count();
    let dated = present
        .iter()
        .filter(|c| matches!(c, CellValue::Text(s) if is_datetime(s)))
        .count();

    let threshold = present.len() as f64 * KIND_RATIO;
    let kind = if present.is_empty() {
        ColumnKind::Categorical
    } else if numeric as f64 > threshold {
        ColumnKind::Numerical
    } else if dated as f64 > threshold {
        ColumnKind::Datetime
    } else {
        ColumnKind::Categorical
    };

    log::trace!(
        "profiled '{}' as {:?}: {} present, {} numeric, {} dates",
        name,
        kind,
        present.len(),
        numeric,
        dated
    );

    ColumnInfo {
        name: name.to_string(),
        kind,
        unique_values,
        missing_values,
        sample_values: present.into_iter().take(SAMPLE_SIZE).cloned().collect(),
    }
}

/// Profile every column of a dataset, in column order.
pub fn profile_columns(dataset: &Dataset) -> Vec<ColumnInfo> {
    dataset
        .columns()
        .iter()
        .map(|name| profile_column(dataset.rows(), name))
        .collect()
}

/// Names of the columns detected as numerical.
pub fn numerical_columns(profiles: &[ColumnInfo]) -> Vec<&str> {
    profiles
        .iter()
        .filter(|p| p.kind == ColumnKind::Numerical)
        .map(|p| p.name.as_str())
        .collect()
}

/// Chart types offered for a feature selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    Boxplot,
    Violin,
    Barplot,
    Pieplot,
    Scatter,
    Line,
    Heatmap,
    BoxplotGrouped,
    BarplotGrouped,
    CorrelationMatrix,
    ParallelCoordinates,
    Pairplot,
    Bubble,
}

/// Suggest charts for the kinds of the selected features.
pub fn suggest_charts(kinds: &[ColumnKind]) -> Vec<ChartKind> {
    use ChartKind::*;
    use ColumnKind::{Categorical, Numerical};

    match kinds {
        [] => Vec::new(),
        [Numerical] => vec![Histogram, Boxplot, Violin],
        [Categorical] => vec![Barplot, Pieplot],
        [_] => Vec::new(),
        [Numerical, Numerical] => vec![Scatter, Line, Heatmap],
        [Categorical, Numerical] | [Numerical, Categorical] => vec![BoxplotGrouped],
        [Categorical, Categorical] => vec![BarplotGrouped, Heatmap],
        [_, _] => Vec::new(),
        _ => {
            let numerical = kinds.iter().filter(|k| **k == Numerical).count();
            let mut charts = Vec::new();
            if numerical >= 3 {
                charts.extend([CorrelationMatrix, ParallelCoordinates, Pairplot]);
            }
            if numerical == 3 {
                charts.push(Bubble);
            }
            charts
        }
    }
}
