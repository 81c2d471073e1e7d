//! Descriptive statistics for a single column
//!
//! Everything here is computed from the column's valid numeric values in
//! full precision. Rounding is a presentation concern handled by
//! [`DescriptiveStats::to_display`].

use serde::{Deserialize, Serialize};

use super::magnitude_scale;
use crate::dataset::{column_cells, numeric_values, Row};

/// How the mode is chosen when several values share the highest frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeTieBreak {
    /// Smallest value among the most frequent ones
    #[default]
    Smallest,
    /// Value whose first occurrence comes earliest in row order
    FirstSeen,
}

/// Descriptive statistics of one column.
///
/// When the column holds no valid numeric value every float field is `0.0`
/// and `count` is zero; see [`DescriptiveStats::is_empty`]. Every field is
/// finite: a variance or range too large for `f64` saturates at `f64::MAX`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of valid numeric values
    pub count: usize,
    /// Rows whose cell is missing or not numeric
    pub missing: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    /// Population variance (divisor `count`)
    pub variance: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    /// Number of distinct numeric values
    pub unique_count: usize,
}

impl DescriptiveStats {
    /// The "no data" sentinel.
    pub fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            mean: 0.0,
            median: 0.0,
            mode: 0.0,
            variance: 0.0,
            std: 0.0,
            min: 0.0,
            max: 0.0,
            range: 0.0,
            unique_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Fraction of rows that were missing or invalid, in `[0, 1]`.
    pub fn missing_ratio(&self) -> f64 {
        let total = self.count + self.missing;
        if total == 0 {
            0.0
        } else {
            self.missing as f64 / total as f64
        }
    }

    /// Text view with every float rounded to `decimals` places.
    pub fn to_display(&self, decimals: usize) -> DisplayStats {
        let fixed = |v: f64| format!("{:.*}", decimals, round_to(v, decimals as u32));
        DisplayStats {
            count: self.count.to_string(),
            missing: self.missing.to_string(),
            mean: fixed(self.mean),
            median: fixed(self.median),
            mode: fixed(self.mode),
            variance: fixed(self.variance),
            std: fixed(self.std),
            min: fixed(self.min),
            max: fixed(self.max),
            range: fixed(self.range),
            unique_count: self.unique_count.to_string(),
        }
    }
}

/// Preformatted statistics for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStats {
    pub count: String,
    pub missing: String,
    pub mean: String,
    pub median: String,
    pub mode: String,
    pub variance: String,
    pub std: String,
    pub min: String,
    pub max: String,
    pub range: String,
    pub unique_count: String,
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Compute descriptive statistics with the default mode tie-break.
pub fn compute_column_stats(rows: &[Row], column: &str) -> DescriptiveStats {
    compute_column_stats_with(rows, column, ModeTieBreak::default())
}

/// Compute descriptive statistics with an explicit mode tie-break.
pub fn compute_column_stats_with(
    rows: &[Row],
    column: &str,
    tie_break: ModeTieBreak,
) -> DescriptiveStats {
    let values = numeric_values(rows, column);
    let missing = rows.len() - values.len();
    log::debug!(
        "column stats for '{}': {} valid, {} missing",
        column,
        values.len(),
        missing
    );
    describe_values(&values, missing, tie_break)
}

/// Descriptive statistics of an already extracted numeric sequence.
pub fn describe_values(values: &[f64], missing: usize, tie_break: ModeTieBreak) -> DescriptiveStats {
    if values.is_empty() {
        return DescriptiveStats::empty(missing);
    }

    let count = values.len();
    let scale = magnitude_scale(values);
    let scaled_mean = values.iter().map(|v| v / scale).sum::<f64>() / count as f64;
    let scaled_variance = values
        .iter()
        .map(|v| (v / scale - scaled_mean).powi(2))
        .sum::<f64>()
        / count as f64;

    let mean = scaled_mean * scale;
    let variance = (scaled_variance * scale * scale).min(f64::MAX);

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[count - 1];
    let median = if count % 2 == 0 {
        sorted[count / 2 - 1] / 2.0 + sorted[count / 2] / 2.0
    } else {
        sorted[count / 2]
    };

    let groups = group_values(values);
    let mode = select_mode(&groups, tie_break);

    DescriptiveStats {
        count,
        missing,
        mean,
        median,
        mode,
        variance,
        std: scaled_variance.sqrt() * scale,
        min,
        max,
        range: (max - min).min(f64::MAX),
        unique_count: groups.len(),
    }
}

#[derive(Debug, Clone, Copy)]
struct ValueGroup {
    value: f64,
    count: usize,
    first_index: usize,
}

// Groups equal values, ascending by value. -0.0 and 0.0 share a group.
fn group_values(values: &[f64]) -> Vec<ValueGroup> {
    let mut indexed: Vec<(usize, f64)> = values.iter().map(|&v| v + 0.0).enumerate().collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut groups: Vec<ValueGroup> = Vec::new();
    for (index, value) in indexed {
        match groups.last_mut() {
            Some(group) if group.value == value => group.count += 1,
            _ => groups.push(ValueGroup {
                value,
                count: 1,
                first_index: index,
            }),
        }
    }
    groups
}

fn select_mode(groups: &[ValueGroup], tie_break: ModeTieBreak) -> f64 {
    let best = match tie_break {
        ModeTieBreak::Smallest => groups.iter().fold(None::<&ValueGroup>, |best, g| match best {
            Some(b) if b.count >= g.count => Some(b),
            _ => Some(g),
        }),
        ModeTieBreak::FirstSeen => groups.iter().fold(None::<&ValueGroup>, |best, g| match best {
            Some(b) if b.count > g.count || (b.count == g.count && b.first_index < g.first_index) => {
                Some(b)
            }
            _ => Some(g),
        }),
    };
    best.map_or(0.0, |g| g.value)
}

/// Box plot summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Five-number summary using the nearest-rank rule `sorted[floor(n * p)]`.
///
/// The median here follows the same rule and so differs from
/// [`DescriptiveStats::median`] for even counts. Returns `None` when the
/// column has no valid numeric value.
pub fn five_number_summary(rows: &[Row], column: &str) -> Option<FiveNumberSummary> {
    let mut sorted = numeric_values(rows, column);
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let rank = |p: f64| sorted[((n as f64 * p).floor() as usize).min(n - 1)];

    Some(FiveNumberSummary {
        min: sorted[0],
        q1: rank(0.25),
        median: rank(0.5),
        q3: rank(0.75),
        max: sorted[n - 1],
    })
}

/// Occurrences of one display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub label: String,
    pub count: usize,
}

/// Count every cell of a column by its display text, in first-seen order.
///
/// Missing cells are counted under `"null"`; bar and pie charts use this
/// for categorical columns. Cells that display alike share one label, so
/// the number `1` and the text `"1"` are counted together.
pub fn value_counts(rows: &[Row], column: &str) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();
    let mut positions: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for cell in column_cells(rows, column) {
        let label = cell.to_string();
        match positions.get(&label) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                positions.insert(label.clone(), counts.len());
                counts.push(ValueCount { label, count: 1 });
            }
        }
    }
    counts
}

/// One spoke of a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarValue {
    pub feature: String,
    /// `mean / max * 100`
    pub value: f64,
}

/// Each feature's mean as a percentage of its maximum, in `features` order.
///
/// A feature with no valid numeric value or a zero maximum scores `0.0`.
pub fn radar_values<S: AsRef<str>>(rows: &[Row], features: &[S]) -> Vec<RadarValue> {
    features
        .iter()
        .map(|feature| {
            let feature = feature.as_ref();
            let stats = compute_column_stats(rows, feature);
            let value = if stats.is_empty() || stats.max == 0.0 {
                0.0
            } else {
                stats.mean / stats.max * 100.0
            };
            RadarValue {
                feature: feature.to_string(),
                value: if value.is_finite() { value } else { 0.0 },
            }
        })
        .collect()
}
