//! Analyzer configuration
//!
//! Defaults reproduce the fixed-filename behaviour of the benchmark workflow:
//! read `benchmark_memory_results.txt` and write everything into
//! `benchmark_analysis/`. A TOML file can override any field, and CLI flags
//! override the file.

use crate::error::{AnalysisError, Result};
use crate::record::DEFAULT_EPSILON;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "benchmark_memory_results.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "benchmark_analysis";

/// Configuration for one analysis run
///
/// # Example
/// ```
/// use benchscope::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.epsilon, 0.001);
/// assert_eq!(config.top_n, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Benchmark report to parse
    pub input: PathBuf,

    /// Directory receiving charts and exports
    pub output_dir: PathBuf,

    /// Smoothing added to efficiency-ratio denominators
    ///
    /// Only changes results when an allocation count or byte count is zero.
    pub epsilon: f64,

    /// Length of the slowest / most-memory listings
    pub top_n: usize,

    /// Length of the allocation efficiency rankings in charts
    pub efficiency_top_n: usize,

    /// Write SVG charts
    pub charts: bool,

    /// Write `benchmark_data.csv`
    pub csv: bool,

    /// Write `benchmark_summary.json`
    pub json: bool,

    /// Report unrecognized time units in the console summary
    pub strict_units: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            epsilon: DEFAULT_EPSILON,
            top_n: 10,
            efficiency_top_n: 15,
            charts: true,
            csv: true,
            json: false,
            strict_units: false,
        }
    }
}

impl AnalyzerConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Deserialize only; call [`validate`](Self::validate) once flags are merged
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }

        if self.top_n == 0 {
            return Err(AnalysisError::InvalidConfig(
                "top_n must be at least 1".to_string(),
            ));
        }

        if self.efficiency_top_n == 0 {
            return Err(AnalysisError::InvalidConfig(
                "efficiency_top_n must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("benchmark_data.csv")
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join("benchmark_summary.json")
    }
}
