//! # colstats
//!
//! Column statistics, histogram binning and correlation for tabular data
//! previews.
//!
//! Given rows of `column -> cell` maps, the engine computes descriptive
//! statistics and a fixed-width histogram for one column, and a Pearson
//! correlation matrix for a set of columns. All computations are pure and
//! never fail: empty or degenerate input yields documented sentinels.
//!
//! ## Modules
//!
//! - [`dataset`] — rows, cells and numeric extraction
//! - [`io`] — CSV and JSON loading
//! - [`stats`] — descriptive statistics, histograms, correlation, [`StatsEngine`]
//! - [`profile`] — column type detection and chart suggestions
//! - [`vis`] — text chart previews
//! - [`config`] — engine configuration
//! - [`error`] — error types
//!
//! ## Quick Start
//!
//! ```
//! use colstats::io::read_csv_str;
//! use colstats::stats::StatsEngine;
//!
//! let csv = "height,weight\n150,50\n160,\n170,70\n180,80\n";
//! let ds = read_csv_str(csv).unwrap();
//!
//! let engine = StatsEngine::default();
//! let stats = engine.column_stats(ds.rows(), "weight");
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.missing, 1);
//!
//! let bins = engine.histogram(ds.rows(), "height");
//! assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod profile;
pub mod stats;
pub mod vis;

// Re-export commonly used types
pub use config::EngineConfig;
pub use dataset::{CellValue, Dataset, Row};
pub use error::{Error, Result};
pub use stats::{
    CorrelationMatrix, DescriptiveStats, HistogramBin, ModeTieBreak, PairingPolicy, StatsEngine,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
