//! Text-based chart previews
//!
//! Renders engine output (histogram bins, value counts, correlation
//! matrices) as ASCII/Unicode text for terminals and logs.

mod charts;

pub use charts::{BarChart, CorrelationHeatmap, HistogramChart};

/// Chart rendering trait
pub trait Chart {
    /// Render the chart to a string
    fn render(&self) -> String;
}

/// Common chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in characters
    pub width: usize,
    /// Chart style
    pub style: ChartStyle,
    /// Show counts next to bars
    pub show_counts: bool,
    /// Title for the chart
    pub title: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 60,
            style: ChartStyle::default(),
            show_counts: true,
            title: None,
        }
    }
}

/// Chart style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Simple ASCII characters
    Ascii,
    /// Unicode block characters
    #[default]
    Unicode,
}

impl ChartStyle {
    pub(crate) fn bar_char(self) -> char {
        match self {
            ChartStyle::Ascii => '#',
            ChartStyle::Unicode => '█',
        }
    }

    /// Glyphs from weakest to strongest, used for heatmap shading.
    pub(crate) fn shades(self) -> &'static [char] {
        match self {
            ChartStyle::Ascii => &[' ', '.', ':', '*', '#'],
            ChartStyle::Unicode => &[' ', '░', '▒', '▓', '█'],
        }
    }
}

pub(crate) fn render_title(output: &mut String, config: &ChartConfig) {
    if let Some(ref title) = config.title {
        output.push_str(&format!("{:^width$}\n\n", title, width = config.width));
    }
}
