//! Chart implementations for text previews

use super::{render_title, Chart, ChartConfig};
use crate::stats::{CorrelationMatrix, HistogramBin, ValueCount};

// ============================================================================
// Histogram
// ============================================================================

/// Horizontal-bar rendering of histogram bins
#[derive(Debug, Clone)]
pub struct HistogramChart {
    bins: Vec<HistogramBin>,
    config: ChartConfig,
}

impl HistogramChart {
    pub fn new(bins: &[HistogramBin]) -> Self {
        Self::with_config(bins, ChartConfig::default())
    }

    pub fn with_config(bins: &[HistogramBin], config: ChartConfig) -> Self {
        Self {
            bins: bins.to_vec(),
            config,
        }
    }
}

impl Chart for HistogramChart {
    fn render(&self) -> String {
        if self.bins.is_empty() {
            return String::from("No data to display");
        }

        let mut output = String::new();
        render_title(&mut output, &self.config);

        let max_count = self.bins.iter().map(|b| b.count).max().unwrap_or(0);
        let bar_width = self.config.width.saturating_sub(17).max(1);
        let bar_char = self.config.style.bar_char();

        for bin in &self.bins {
            let bar_len = if max_count > 0 {
                (bin.count as f64 / max_count as f64 * bar_width as f64).round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat(bar_char).take(bar_len).collect();

            output.push_str(&format!(
                "{:>7.1}-{:<7.1} │{:<width$}│",
                bin.start,
                bin.end,
                bar,
                width = bar_width
            ));
            if self.config.show_counts {
                output.push_str(&format!(" {}", bin.count));
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// Bar Chart
// ============================================================================

/// Horizontal bars for value counts
#[derive(Debug, Clone)]
pub struct BarChart {
    counts: Vec<ValueCount>,
    config: ChartConfig,
}

impl BarChart {
    pub fn new(counts: &[ValueCount]) -> Self {
        Self::with_config(counts, ChartConfig::default())
    }

    pub fn with_config(counts: &[ValueCount], config: ChartConfig) -> Self {
        Self {
            counts: counts.to_vec(),
            config,
        }
    }
}

impl Chart for BarChart {
    fn render(&self) -> String {
        if self.counts.is_empty() {
            return String::from("No data to display");
        }

        let mut output = String::new();
        render_title(&mut output, &self.config);

        let label_width = self
            .counts
            .iter()
            .map(|c| c.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(20);
        let bar_width = self.config.width.saturating_sub(label_width + 10).max(1);
        let max_count = self.counts.iter().map(|c| c.count).max().unwrap_or(0);
        let bar_char = self.config.style.bar_char();

        for count in &self.counts {
            let label: String = count.label.chars().take(label_width).collect();
            let bar_len = if max_count > 0 {
                (count.count as f64 / max_count as f64 * bar_width as f64).round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat(bar_char).take(bar_len).collect();

            output.push_str(&format!("{:>lw$} │{}", label, bar, lw = label_width));
            if self.config.show_counts {
                output.push_str(&format!(" {}", count.count));
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// Correlation Heatmap
// ============================================================================

/// Grid of coefficients with a shade glyph per cell
#[derive(Debug, Clone)]
pub struct CorrelationHeatmap {
    matrix: CorrelationMatrix,
    config: ChartConfig,
}

impl CorrelationHeatmap {
    pub fn new(matrix: &CorrelationMatrix) -> Self {
        Self::with_config(matrix, ChartConfig::default())
    }

    pub fn with_config(matrix: &CorrelationMatrix, config: ChartConfig) -> Self {
        Self {
            matrix: matrix.clone(),
            config,
        }
    }

    fn shade(&self, r: f64) -> char {
        let shades = self.config.style.shades();
        let top = shades.len() - 1;
        let idx = (r.abs().min(1.0) * top as f64).round() as usize;
        shades[idx.min(top)]
    }
}

impl Chart for CorrelationHeatmap {
    fn render(&self) -> String {
        if self.matrix.is_empty() {
            return String::from("No correlation data available");
        }

        const CELL: usize = 7;
        let names: Vec<String> = self
            .matrix
            .columns()
            .iter()
            .map(|c| c.chars().take(CELL - 1).collect())
            .collect();
        let label_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

        let mut output = String::new();
        render_title(&mut output, &self.config);

        output.push_str(&" ".repeat(label_width + 1));
        for name in &names {
            output.push_str(&format!("{:>cell$}", name, cell = CELL));
        }
        output.push('\n');

        for (name, row) in names.iter().zip(self.matrix.values()) {
            output.push_str(&format!("{:>lw$} ", name, lw = label_width));
            for &r in row {
                output.push_str(&format!("{:>6.2}{}", r, self.shade(r)));
            }
            output.push('\n');
        }

        output
    }
}
