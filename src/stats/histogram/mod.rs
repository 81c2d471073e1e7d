//! Fixed-width histogram binning

use serde::{Deserialize, Serialize};

use crate::dataset::{numeric_values, Row};

/// Bin count used for chart previews.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// One histogram bin covering `[start, end)`; the last bin also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Axis label such as `"1.5-3.0"`.
    pub fn label(&self, decimals: usize) -> String {
        format!("{:.*}-{:.*}", decimals, self.start, decimals, self.end)
    }
}

/// Histogram of a column with `bin_count` equal-width bins.
///
/// Returns an empty vector when the column has no valid numeric value or
/// `bin_count` is zero.
pub fn compute_histogram(rows: &[Row], column: &str, bin_count: usize) -> Vec<HistogramBin> {
    let values = numeric_values(rows, column);
    log::trace!(
        "histogram for '{}': {} values into {} bins",
        column,
        values.len(),
        bin_count
    );
    bin_values(&values, bin_count)
}

/// Bin an already extracted numeric sequence.
pub fn bin_values(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bin_size = (max - min) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| {
            let start = if i == 0 { min } else { min + i as f64 * bin_size };
            let end = if i + 1 == bin_count {
                max
            } else {
                min + (i + 1) as f64 * bin_size
            };
            HistogramBin { start, end, count: 0 }
        })
        .collect();

    if bin_size == 0.0 {
        bins[0].count = values.len();
        return bins;
    }

    for &value in values {
        let idx = ((value - min) / bin_size).floor();
        // NaN and negatives saturate to 0 on the cast
        let idx = (idx as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }

    bins
}
