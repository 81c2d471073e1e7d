//! Column statistics engine
//!
//! Pure, synchronous functions from `(rows, column selection)` to derived
//! statistics. Nothing is cached: every call recomputes from the rows it
//! is given, and no input can make these functions fail. Degenerate data
//! (no rows, no valid numbers, constant columns) resolves to documented
//! sentinel values.
//!
//! # Example
//! ```rust
//! use colstats::dataset::row;
//! use colstats::stats::{self, StatsEngine};
//!
//! let rows = vec![
//!     row([("x", 1.0), ("y", 2.0)]),
//!     row([("x", 2.0), ("y", 4.0)]),
//!     row([("x", 3.0), ("y", 6.0)]),
//! ];
//!
//! let summary = stats::compute_column_stats(&rows, "x");
//! assert_eq!(summary.median, 2.0);
//!
//! let engine = StatsEngine::default();
//! let matrix = engine.correlation_matrix(&rows, &["x", "y"]);
//! assert!((matrix.get(0, 1).unwrap() - 1.0).abs() < 1e-9);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;

pub use correlation::{
    compute_correlation_matrix, compute_correlation_matrix_with, line_points, pair_values,
    pearson, scatter_points, CorrelationMatrix, CorrelationPair, CorrelationStrength, PairingPolicy,
    StrengthThresholds,
};
pub use descriptive::{
    compute_column_stats, compute_column_stats_with, describe_values, five_number_summary,
    radar_values, round_to, value_counts, DescriptiveStats, DisplayStats, FiveNumberSummary,
    ModeTieBreak, RadarValue, ValueCount,
};
pub use histogram::{bin_values, compute_histogram, HistogramBin, DEFAULT_BIN_COUNT};

use crate::config::EngineConfig;
use crate::dataset::Row;

/// Power of two near the largest magnitude in `values`; `1.0` when every
/// value is zero or any is non-finite.
///
/// Dividing by a power of two is exact, so statistics computed on the
/// scaled values match the unscaled ones bit for bit while their sums and
/// squares stay finite for inputs near `f64::MAX`.
pub(crate) fn magnitude_scale(values: &[f64]) -> f64 {
    let largest = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if largest == 0.0 || !largest.is_finite() {
        return 1.0;
    }
    let exponent = (largest.log2().floor() as i32).clamp(-1022, 1023);
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

/// The statistics operations bound to one [`EngineConfig`].
///
/// Holds no state besides the configuration.
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    config: EngineConfig,
}

impl StatsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn column_stats(&self, rows: &[Row], column: &str) -> DescriptiveStats {
        compute_column_stats_with(rows, column, self.config.mode_tie_break)
    }

    /// Statistics preformatted with the configured number of decimals.
    pub fn display_stats(&self, rows: &[Row], column: &str) -> DisplayStats {
        self.column_stats(rows, column)
            .to_display(self.config.display_decimals)
    }

    pub fn histogram(&self, rows: &[Row], column: &str) -> Vec<HistogramBin> {
        compute_histogram(rows, column, self.config.bin_count)
    }

    pub fn correlation_matrix<S: AsRef<str>>(&self, rows: &[Row], columns: &[S]) -> CorrelationMatrix {
        compute_correlation_matrix_with(rows, columns, self.config.pairing)
    }

    /// Pairs at or above the configured strong threshold.
    pub fn strong_correlations<S: AsRef<str>>(&self, rows: &[Row], columns: &[S]) -> Vec<CorrelationPair> {
        let thresholds = self.config.strength_thresholds();
        self.correlation_matrix(rows, columns)
            .strong_pairs(thresholds.strong, &thresholds)
    }

    pub fn classify(&self, r: f64) -> CorrelationStrength {
        CorrelationStrength::classify(r, &self.config.strength_thresholds())
    }

    pub fn five_number_summary(&self, rows: &[Row], column: &str) -> Option<FiveNumberSummary> {
        five_number_summary(rows, column)
    }

    pub fn value_counts(&self, rows: &[Row], column: &str) -> Vec<ValueCount> {
        value_counts(rows, column)
    }

    pub fn scatter_points(&self, rows: &[Row], x: &str, y: &str) -> Vec<(f64, f64)> {
        scatter_points(rows, x, y)
    }

    pub fn line_points(&self, rows: &[Row], x: &str, y: &str) -> Vec<(f64, f64)> {
        line_points(rows, x, y)
    }

    pub fn radar_values<S: AsRef<str>>(&self, rows: &[Row], features: &[S]) -> Vec<RadarValue> {
        radar_values(rows, features)
    }
}
