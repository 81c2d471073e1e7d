//! Pearson correlation over dataset columns
//!
//! # Pairing
//!
//! Two columns can have missing values at different rows. With
//! [`PairingPolicy::JointRows`] only rows where both cells are valid
//! numbers take part. [`PairingPolicy::Positional`] filters each column on
//! its own and pairs the survivors by position after truncating to the
//! shorter length; it is kept for compatibility with earlier previews and
//! can misalign values when missingness differs between columns.

use serde::{Deserialize, Serialize};

use super::magnitude_scale;
use crate::dataset::{numeric_cells, Row};

/// How values of two columns are paired before correlating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingPolicy {
    /// Rows where both columns are valid numbers
    #[default]
    JointRows,
    /// Independently filtered columns zipped by position
    Positional,
}

/// Pearson correlation of two sequences.
///
/// Only the first `min(x.len(), y.len())` elements take part. An empty
/// overlap or a constant sequence yields `0.0`.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);

    // r is invariant under positive scaling of either sequence
    let (scale_x, scale_y) = (magnitude_scale(x), magnitude_scale(y));
    let mean_x = x.iter().map(|v| v / scale_x).sum::<f64>() / n as f64;
    let mean_y = y.iter().map(|v| v / scale_y).sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi / scale_x - mean_x;
        let dy = yi / scale_y - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    if sum_sq_x == 0.0 || sum_sq_y == 0.0 {
        return 0.0;
    }

    let r = numerator / (sum_sq_x.sqrt() * sum_sq_y.sqrt());
    if r.is_finite() {
        r.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Align two per-row numeric views according to `policy`.
pub fn pair_values(a: &[Option<f64>], b: &[Option<f64>], policy: PairingPolicy) -> (Vec<f64>, Vec<f64>) {
    match policy {
        PairingPolicy::JointRows => a
            .iter()
            .zip(b)
            .filter_map(|(&x, &y)| Some((x?, y?)))
            .unzip(),
        PairingPolicy::Positional => {
            let mut xs: Vec<f64> = a.iter().flatten().copied().collect();
            let mut ys: Vec<f64> = b.iter().flatten().copied().collect();
            let n = xs.len().min(ys.len());
            xs.truncate(n);
            ys.truncate(n);
            (xs, ys)
        }
    }
}

/// Points for a scatter plot: rows where both columns are valid numbers.
pub fn scatter_points(rows: &[Row], x: &str, y: &str) -> Vec<(f64, f64)> {
    let (xs, ys) = pair_values(
        &numeric_cells(rows, x),
        &numeric_cells(rows, y),
        PairingPolicy::JointRows,
    );
    xs.into_iter().zip(ys).collect()
}

/// Points for a line chart, sorted by x.
///
/// Rows whose y cell is not a valid number are dropped. An invalid x cell
/// falls back to the row's index.
pub fn line_points(rows: &[Row], x: &str, y: &str) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = numeric_cells(rows, x)
        .into_iter()
        .zip(numeric_cells(rows, y))
        .enumerate()
        .filter_map(|(index, (xv, yv))| Some((xv.unwrap_or(index as f64), yv?)))
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

/// Qualitative strength of a coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

/// Cut-offs on `|r|` used by [`CorrelationStrength::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthThresholds {
    pub strong: f64,
    pub moderate: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            strong: 0.7,
            moderate: 0.3,
        }
    }
}

impl CorrelationStrength {
    pub fn classify(r: f64, thresholds: &StrengthThresholds) -> Self {
        let magnitude = r.abs();
        if magnitude >= thresholds.strong {
            CorrelationStrength::Strong
        } else if magnitude >= thresholds.moderate {
            CorrelationStrength::Moderate
        } else {
            CorrelationStrength::Weak
        }
    }
}

/// A pair of distinct columns and their coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub col_a: String,
    pub col_b: String,
    pub r: f64,
    pub strength: CorrelationStrength,
}

/// Square correlation matrix; row and column order follow the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Matrix rows.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i)?.get(j).copied()
    }

    /// Lookup by column names; the first occurrence of each name is used.
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.get(i, j)
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| (self.values[i][j] - self.values[j][i]).abs() <= tolerance))
    }

    /// Upper-triangle pairs of distinct columns with `|r| >= threshold`,
    /// sorted by `|r|` descending.
    pub fn strong_pairs(&self, threshold: f64, thresholds: &StrengthThresholds) -> Vec<CorrelationPair> {
        let n = self.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.columns[i] == self.columns[j] {
                    continue;
                }
                let r = self.values[i][j];
                if r.abs() >= threshold {
                    pairs.push(CorrelationPair {
                        col_a: self.columns[i].clone(),
                        col_b: self.columns[j].clone(),
                        r,
                        strength: CorrelationStrength::classify(r, thresholds),
                    });
                }
            }
        }

        pairs.sort_by(|a, b| b.r.abs().total_cmp(&a.r.abs()));
        pairs
    }
}

/// Correlation matrix with the default pairing policy.
pub fn compute_correlation_matrix<S: AsRef<str>>(rows: &[Row], columns: &[S]) -> CorrelationMatrix {
    compute_correlation_matrix_with(rows, columns, PairingPolicy::default())
}

/// Correlation matrix for every ordered pair of `columns`.
///
/// The diagonal, and any pair naming the same column twice, is exactly
/// `1.0` regardless of the column's content.
pub fn compute_correlation_matrix_with<S: AsRef<str>>(
    rows: &[Row],
    columns: &[S],
    policy: PairingPolicy,
) -> CorrelationMatrix {
    let names: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();
    let cells: Vec<Vec<Option<f64>>> = names.iter().map(|c| numeric_cells(rows, c)).collect();
    log::debug!(
        "correlation matrix over {} columns and {} rows ({:?})",
        names.len(),
        rows.len(),
        policy
    );

    let values = names
        .iter()
        .enumerate()
        .map(|(i, a)| {
            names
                .iter()
                .enumerate()
                .map(|(j, b)| {
                    if a == b {
                        return 1.0;
                    }
                    let (x, y) = pair_values(&cells[i], &cells[j], policy);
                    pearson(&x, &y)
                })
                .collect()
        })
        .collect();

    CorrelationMatrix {
        columns: names,
        values,
    }
}
