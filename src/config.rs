//! Engine configuration
//!
//! Every field has a default, so a configuration file only needs the
//! keys it changes:
//!
//! ```toml
//! bin_count = 20
//! mode_tie_break = "first_seen"
//! pairing = "positional"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::{ModeTieBreak, PairingPolicy, StrengthThresholds, DEFAULT_BIN_COUNT};

/// Tunables for [`StatsEngine`](crate::stats::StatsEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Histogram bin count
    pub bin_count: usize,
    pub mode_tie_break: ModeTieBreak,
    pub pairing: PairingPolicy,
    /// `|r|` at or above which a pair is strong
    pub strong_threshold: f64,
    /// `|r|` at or above which a pair is moderate
    pub moderate_threshold: f64,
    /// Decimals used when formatting statistics
    pub display_decimals: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let thresholds = StrengthThresholds::default();
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            mode_tie_break: ModeTieBreak::default(),
            pairing: PairingPolicy::default(),
            strong_threshold: thresholds.strong,
            moderate_threshold: thresholds.moderate,
            display_decimals: 2,
        }
    }
}

impl EngineConfig {
    pub fn strength_thresholds(&self) -> StrengthThresholds {
        StrengthThresholds {
            strong: self.strong_threshold,
            moderate: self.moderate_threshold,
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.bin_count == 0 {
            return Err(Error::InvalidConfig("bin_count must be at least 1".into()));
        }
        for (name, value) in [
            ("strong_threshold", self.strong_threshold),
            ("moderate_threshold", self.moderate_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.moderate_threshold > self.strong_threshold {
            return Err(Error::InvalidConfig(format!(
                "moderate_threshold ({}) exceeds strong_threshold ({})",
                self.moderate_threshold, self.strong_threshold
            )));
        }
        if self.display_decimals > 15 {
            return Err(Error::InvalidConfig(format!(
                "display_decimals must be at most 15, got {}",
                self.display_decimals
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, choosing the format by extension
    /// (`toml`, `yaml`/`yml`, `json`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let loader: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "unsupported config file extension: {}",
                    path.display()
                )))
            }
        };

        let contents = fs::read_to_string(path)?;
        let config = loader(&contents)?;
        log::debug!("loaded engine config from {}", path.display());
        Ok(config)
    }
}
