//! Visualization helpers
//!
//! Graphical rendering belongs to the host application; this module only
//! provides text previews of engine output.

pub mod ascii;

pub use self::ascii::{
    BarChart, Chart, ChartConfig, ChartStyle, CorrelationHeatmap, HistogramChart,
};
